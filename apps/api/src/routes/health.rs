use axum::Json;

use crate::chat::dispatcher;
use crate::models::chat::HealthResponse;

/// GET /health
/// Liveness only; never inspects configuration or sessions.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(dispatcher::health())
}
