//! HTTP API

pub mod call_handler;
pub mod customer_handler;
pub mod dto;
pub mod error;
pub mod health;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
