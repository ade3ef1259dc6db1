//! Customer dataset loading
//!
//! The dataset is version-controlled alongside the code and compiled into the
//! binary. Deployments may point `directory.path` at a different file; it is
//! read once at startup and never written back.

use crate::domain::customer::CustomerDirectory;
use crate::domain::shared::{DomainError, Result};
use std::path::Path;
use tracing::info;

/// Dataset shipped with the service
pub const BUNDLED_CUSTOMERS: &str = include_str!("../../../data/customers.json");

/// Load the customer directory from `path`, or the bundled dataset when no
/// path is configured.
pub fn load_customer_directory(path: Option<&Path>) -> Result<CustomerDirectory> {
    let directory = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|e| {
                DomainError::Internal(format!(
                    "failed to read customer data {}: {}",
                    path.display(),
                    e
                ))
            })?;
            CustomerDirectory::from_json(&json)?
        }
        None => CustomerDirectory::from_json(BUNDLED_CUSTOMERS)?,
    };

    info!(
        "Loaded {} customers from {}",
        directory.len(),
        path.map(|p| p.display().to_string())
            .unwrap_or_else(|| "bundled dataset".to_string())
    );

    Ok(directory)
}
