//! Call API handlers

use super::dto::{TriggerCallRequest, TriggerCallResponse};
use super::error::ApiError;
use super::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use tracing::info;

/// Trigger a call to a customer about their order
///
/// A body that is empty or not declared as JSON is read as `{}`, which the
/// eligibility rule then turns down.
pub async fn trigger_call(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<TriggerCallResponse>, ApiError> {
    let req = parse_call_request(&headers, &body)?;

    info!(
        "API: Trigger call to {:?} (order status: {:?})",
        req.number, req.order_status
    );

    let sid = state.call_service.trigger(req.into()).await?;
    Ok(Json(TriggerCallResponse::new(sid)))
}

fn parse_call_request(headers: &HeaderMap, body: &[u8]) -> Result<TriggerCallRequest, ApiError> {
    if body.is_empty() || !has_json_content_type(headers) {
        return Ok(TriggerCallRequest::default());
    }

    Json::<TriggerCallRequest>::from_bytes(body)
        .map(|Json(req)| req)
        .map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))
}

/// `application/json` or any `application/*+json` type, parameters ignored
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
