//! Call bounded context - deciding whether a customer may be called and
//! handing the call to the placement provider

pub mod dispatcher;
pub mod eligibility;
pub mod message;

pub use dispatcher::{CallDispatcher, DispatchError, OutboundCall};
pub use eligibility::{is_call_allowed, CALLABLE_ORDER_STATUSES};
pub use message::voice_message;
