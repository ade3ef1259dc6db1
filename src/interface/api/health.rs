//! Health check endpoint

/// Body returned by the health check
pub const HEALTH_MESSAGE: &str = "AI Calling Agent Backend is running";

/// Liveness probe: answers as long as the process can serve HTTP.
pub async fn health_check() -> &'static str {
    HEALTH_MESSAGE
}
