//! Persistence implementations

pub mod customer_dataset;

pub use customer_dataset::{load_customer_directory, BUNDLED_CUSTOMERS};
