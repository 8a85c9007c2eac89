pub mod health;
pub mod query;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(query::root_handler))
        .route("/health", get(health::health_handler))
        // JSON API
        .route("/api/v1/chat", post(handlers::handle_chat))
        .route("/api/v1/profile", get(handlers::handle_get_profile))
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_end_session),
        )
        .with_state(state)
}
