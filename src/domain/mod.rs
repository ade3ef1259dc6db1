//! Domain layer - Core business rules
//!
//! This layer contains:
//! - Entities: customer records with identity
//! - Value Objects: identifiers shared across contexts
//! - Domain Services: the call eligibility rule
//! - Ports: the call placement capability

pub mod call;
pub mod customer;
pub mod shared;

// Re-export commonly used types
pub use shared::{DomainError, Result};
