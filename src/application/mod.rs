//! Application layer - Use cases
//!
//! Orchestrates domain rules and ports to fulfil requests coming in through
//! the interface layer.

pub mod call;

pub use call::{CallError, CallRequest, CallService};
