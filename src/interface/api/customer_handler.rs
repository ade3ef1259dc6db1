//! Customer API handlers

use super::error::ApiError;
use super::state::AppState;
use crate::domain::customer::Customer;
use crate::domain::shared::CustomerId;
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

/// List all customers
pub async fn list_customers(State(state): State<AppState>) -> Json<Vec<Customer>> {
    info!("API: Listing customers");
    Json(state.directory.list_all().to_vec())
}

/// Get customer by ID
///
/// A segment that is not an integer cannot match any customer and gets the
/// same 404 as an unknown identifier.
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    info!("API: Getting customer ID: {}", id);

    CustomerId::parse(&id)
        .and_then(|id| state.directory.find_by_id(id))
        .cloned()
        .map(Json)
        .ok_or(ApiError::CustomerNotFound)
}
