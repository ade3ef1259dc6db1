//! Telephony provider integrations
//!
//! Implementations of [`crate::domain::call::CallDispatcher`].

pub mod stub;
pub mod timeout;

pub use stub::{StubDispatcher, STUB_CALL_SID};
pub use timeout::TimeoutDispatcher;
