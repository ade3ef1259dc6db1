//! Customer directory
//!
//! An immutable, process-wide list of customers. It is built once at startup
//! and shared between request handlers; nothing writes to it afterwards.

use super::entity::Customer;
use crate::domain::shared::{CustomerId, DomainError, Result};
use std::collections::HashSet;
use std::sync::Arc;

/// Read-only customer directory
#[derive(Debug, Clone)]
pub struct CustomerDirectory {
    customers: Arc<[Customer]>,
}

impl Default for CustomerDirectory {
    fn default() -> Self {
        Self {
            customers: Arc::from(Vec::new()),
        }
    }
}

impl CustomerDirectory {
    /// Build a directory, rejecting duplicate identifiers.
    pub fn new(customers: Vec<Customer>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(customers.len());
        for customer in &customers {
            if !seen.insert(customer.id) {
                return Err(DomainError::Conflict(format!(
                    "duplicate customer id {}",
                    customer.id
                )));
            }
        }

        Ok(Self {
            customers: customers.into(),
        })
    }

    /// Parse a JSON array of customer records.
    pub fn from_json(json: &str) -> Result<Self> {
        let customers: Vec<Customer> = serde_json::from_str(json)
            .map_err(|e| DomainError::ValidationError(format!("invalid customer data: {}", e)))?;
        Self::new(customers)
    }

    /// All customers, in dataset order
    pub fn list_all(&self) -> &[Customer] {
        &self.customers
    }

    /// Find a customer by identifier. Absence is a normal outcome, not an error.
    pub fn find_by_id(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
