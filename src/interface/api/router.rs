//! API Router configuration

use super::call_handler::trigger_call;
use super::customer_handler::{get_customer, list_customers};
use super::health::health_check;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the API router
pub fn build_router(state: AppState) -> Router {
    // Health check route
    let health_routes = Router::new().route("/", get(health_check));

    // Customer directory routes (read-only)
    let customer_routes = Router::new()
        .route("/customers", get(list_customers))
        .route("/customers/:id", get(get_customer));

    // Call routes
    let call_routes = Router::new().route("/call", post(trigger_call));

    Router::new()
        .merge(health_routes)
        .merge(customer_routes)
        .merge(call_routes)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
