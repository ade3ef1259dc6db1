//! Dialout - order follow-up calling backend
//!
//! Serves a read-only customer directory over HTTP and places outbound calls
//! to customers whose orders are pending or delayed. Laid out in layers:
//! domain rules, application use cases, infrastructure adapters and the HTTP
//! interface.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interface;

// Re-export commonly used types
pub use domain::shared::error::DomainError;
pub use domain::shared::error::Result;
