//! Bounded call placement

use crate::domain::call::{CallDispatcher, DispatchError, OutboundCall};
use crate::domain::shared::CallSid;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Wraps a dispatcher so that no call placement waits longer than `timeout`.
pub struct TimeoutDispatcher {
    inner: Arc<dyn CallDispatcher>,
    timeout: Duration,
}

impl TimeoutDispatcher {
    pub fn new(inner: Arc<dyn CallDispatcher>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl CallDispatcher for TimeoutDispatcher {
    async fn place_call(&self, call: OutboundCall) -> Result<CallSid, DispatchError> {
        match tokio::time::timeout(self.timeout, self.inner.place_call(call)).await {
            Ok(result) => result,
            Err(_) => {
                warn!("Call placement timed out after {:?}", self.timeout);
                Err(DispatchError::Timeout(self.timeout))
            }
        }
    }
}
