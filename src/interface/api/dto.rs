//! API DTOs (Data Transfer Objects)

use crate::application::CallRequest;
use crate::domain::shared::CallSid;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Success message for `POST /call`
pub const CALL_TRIGGERED_MESSAGE: &str = "Call triggered successfully";

/// `POST /call` request body. Every field may be absent and of any JSON type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TriggerCallRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub number: Option<Value>,
    #[serde(default)]
    pub order_status: Option<Value>,
}

impl From<TriggerCallRequest> for CallRequest {
    fn from(req: TriggerCallRequest) -> Self {
        Self {
            name: req.name.map(value_text),
            number: req.number.map(value_text),
            order_status: req.order_status.map(value_text),
        }
    }
}

/// Strings are taken as-is; any other value becomes its JSON text.
fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// `POST /call` success body
#[derive(Debug, Serialize)]
pub struct TriggerCallResponse {
    pub message: &'static str,
    #[serde(rename = "callSid")]
    pub call_sid: CallSid,
}

impl TriggerCallResponse {
    pub fn new(call_sid: CallSid) -> Self {
        Self {
            message: CALL_TRIGGERED_MESSAGE,
            call_sid,
        }
    }
}

/// Error body: a message, plus the underlying cause where there is one
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    pub fn with_cause(message: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: Some(cause.into()),
        }
    }
}
