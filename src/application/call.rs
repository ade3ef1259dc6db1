//! Trigger-call use case

use crate::domain::call::{is_call_allowed, voice_message, CallDispatcher, DispatchError, OutboundCall};
use crate::domain::shared::CallSid;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Rendering of an order status the request did not carry
pub const MISSING_ORDER_STATUS: &str = "missing";

/// Request to call a customer about their order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallRequest {
    pub name: Option<String>,
    pub number: Option<String>,
    pub order_status: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CallError {
    #[error("Call not allowed. Order status is {}", .order_status.as_deref().unwrap_or(MISSING_ORDER_STATUS))]
    NotAllowed { order_status: Option<String> },

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Checks eligibility and hands eligible calls to the dispatcher
pub struct CallService {
    dispatcher: Arc<dyn CallDispatcher>,
    origin: String,
}

impl CallService {
    /// `origin` is the caller ID presented on every placed call.
    pub fn new(dispatcher: Arc<dyn CallDispatcher>, origin: impl Into<String>) -> Self {
        Self {
            dispatcher,
            origin: origin.into(),
        }
    }

    /// Place a call for `request` if its order status allows it.
    pub async fn trigger(&self, request: CallRequest) -> Result<CallSid, CallError> {
        let order_status = match request.order_status.as_deref() {
            Some(status) if is_call_allowed(status) => status.to_string(),
            _ => {
                debug!("Call denied for order status {:?}", request.order_status);
                return Err(CallError::NotAllowed {
                    order_status: request.order_status.clone(),
                });
            }
        };

        let call = OutboundCall {
            to: request.number.clone().unwrap_or_default(),
            from: self.origin.clone(),
            message: voice_message(request.name.as_deref(), &order_status),
        };

        info!("Placing call to {} (order status: {})", call.to, order_status);
        let sid = self.dispatcher.place_call(call).await?;
        info!("Call placed: {}", sid);

        Ok(sid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::call::dispatcher::MockCallDispatcher;
    use mockall::predicate::*;

    fn request(order_status: Option<&str>) -> CallRequest {
        CallRequest {
            name: Some("Alice".to_string()),
            number: Some("+15550001".to_string()),
            order_status: order_status.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_trigger_eligible_call() {
        let mut dispatcher = MockCallDispatcher::new();
        dispatcher
            .expect_place_call()
            .with(function(|call: &OutboundCall| {
                call.to == "+15550001"
                    && call.from == "+15559999"
                    && call.message.contains("Hello Alice.")
                    && call.message.contains("currently pending.")
            }))
            .times(1)
            .returning(|_| Ok(CallSid::new("CA-1")));

        let service = CallService::new(Arc::new(dispatcher), "+15559999");
        let sid = service.trigger(request(Some("pending"))).await.unwrap();
        assert_eq!(sid.as_str(), "CA-1");
    }

    #[tokio::test]
    async fn test_ineligible_call_never_dispatches() {
        let mut dispatcher = MockCallDispatcher::new();
        dispatcher.expect_place_call().times(0);
        let service = CallService::new(Arc::new(dispatcher), "+15559999");

        let err = service.trigger(request(Some("shipped"))).await.unwrap_err();
        assert_eq!(
            err,
            CallError::NotAllowed {
                order_status: Some("shipped".to_string())
            }
        );
        assert_eq!(err.to_string(), "Call not allowed. Order status is shipped");
    }

    #[tokio::test]
    async fn test_missing_order_status_denied() {
        let mut dispatcher = MockCallDispatcher::new();
        dispatcher.expect_place_call().times(0);
        let service = CallService::new(Arc::new(dispatcher), "+15559999");

        let err = service.trigger(request(None)).await.unwrap_err();
        assert_eq!(err.to_string(), "Call not allowed. Order status is missing");

        let err = service.trigger(request(Some(""))).await.unwrap_err();
        assert_eq!(err.to_string(), "Call not allowed. Order status is ");
    }

    #[tokio::test]
    async fn test_dispatch_failure_propagates() {
        let mut dispatcher = MockCallDispatcher::new();
        dispatcher
            .expect_place_call()
            .returning(|_| Err(DispatchError::Rejected("invalid number".to_string())));
        let service = CallService::new(Arc::new(dispatcher), "+15559999");

        let err = service.trigger(request(Some("delayed"))).await.unwrap_err();
        assert_eq!(
            err,
            CallError::Dispatch(DispatchError::Rejected("invalid number".to_string()))
        );
        assert_eq!(err.to_string(), "Call rejected by provider: invalid number");
    }

    #[tokio::test]
    async fn test_missing_number_passes_through_empty() {
        let mut dispatcher = MockCallDispatcher::new();
        dispatcher
            .expect_place_call()
            .with(function(|call: &OutboundCall| call.to.is_empty()))
            .returning(|_| Ok(CallSid::new("CA-2")));
        let service = CallService::new(Arc::new(dispatcher), "");

        let req = CallRequest {
            order_status: Some("pending".to_string()),
            ..Default::default()
        };
        assert!(service.trigger(req).await.is_ok());
    }
}
