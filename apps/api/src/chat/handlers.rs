//! Axum route handlers for the JSON chat and session API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::chat::dispatcher;
use crate::errors::AppError;
use crate::models::chat::{ChatResponse, ChatStatus, SessionView};
use crate::profile::PortfolioProfile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub session_id: Option<Uuid>,
}

/// POST /api/v1/chat
///
/// Same contract as `/?endpoint=chat`. With a `session_id`, a successful exchange
/// is appended to that session's transcript.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let Some(session_id) = request.session_id else {
        return Ok(Json(
            dispatcher::chat(&state.resolver, request.message.as_deref()).await,
        ));
    };

    if !state.sessions.contains(session_id).await {
        return Err(session_not_found(session_id));
    }

    let response = dispatcher::chat(&state.resolver, request.message.as_deref()).await;

    if response.status == ChatStatus::Success {
        let question = request.message.as_deref().unwrap_or_default().trim();
        let reply = response.response.as_deref().unwrap_or_default();
        // Session may have been ended while the reply was being produced.
        if !state
            .sessions
            .record_exchange(session_id, question, reply)
            .await
        {
            return Err(session_not_found(session_id));
        }
    }

    Ok(Json(response.with_session(session_id)))
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionView>) {
    (StatusCode::CREATED, Json(state.sessions.create().await))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    state
        .sessions
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| session_not_found(id))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_end_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.end(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(id))
    }
}

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<PortfolioProfile> {
    Json(state.profile.as_ref().clone())
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}
