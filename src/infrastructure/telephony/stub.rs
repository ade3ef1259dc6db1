//! Stub call placement
//!
//! Stands in for the real provider client. Every call succeeds immediately
//! with the same identifier.

use crate::domain::call::{CallDispatcher, DispatchError, OutboundCall};
use crate::domain::shared::CallSid;
use async_trait::async_trait;
use tracing::debug;

/// Identifier returned for every stubbed call
pub const STUB_CALL_SID: &str = "FAKE_CALL_SID_123";

#[derive(Debug, Clone, Default)]
pub struct StubDispatcher;

impl StubDispatcher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CallDispatcher for StubDispatcher {
    async fn place_call(&self, call: OutboundCall) -> Result<CallSid, DispatchError> {
        debug!("Stub dispatch: to={} from={} message={}", call.to, call.from, call.message);
        Ok(CallSid::new(STUB_CALL_SID))
    }
}
