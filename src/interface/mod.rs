//! Interface layer - External interfaces
//!
//! This layer handles:
//! - REST API endpoints
//! - Request/response formatting
//! - Mapping application errors onto HTTP responses

pub mod api;
