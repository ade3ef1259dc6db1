//! Call placement capability
//!
//! The telephony provider sits behind [`CallDispatcher`]. Implementations live
//! in the infrastructure layer; tests substitute deterministic fakes.

use crate::domain::shared::CallSid;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// A call ready to be handed to the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundCall {
    /// Destination number, passed through without validation
    pub to: String,
    /// Origin (caller ID) number
    pub from: String,
    /// Voice document the provider plays once the call connects
    pub message: String,
}

/// Call placement failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Call rejected by provider: {0}")]
    Rejected(String),

    #[error("Provider unreachable: {0}")]
    Transport(String),

    #[error("Call placement timed out after {0:?}")]
    Timeout(Duration),
}

/// Places outbound calls through an external provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CallDispatcher: Send + Sync {
    /// Place a call, returning the provider's identifier for it
    async fn place_call(&self, call: OutboundCall) -> Result<CallSid, DispatchError>;
}
