//! Infrastructure layer - Technical implementations
//!
//! This layer contains:
//! - Customer dataset loading
//! - Telephony provider integrations

pub mod persistence;
pub mod telephony;
