//! Axum route handlers for screening sessions.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::controller::SessionSnapshot;
use crate::chat::invitation::SendReport;
use crate::chat::weights::WeightConfig;
use crate::errors::AppError;
use crate::models::candidate::ParsedResume;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub candidates: Vec<ParsedResume>,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
    pub session: SessionSnapshot,
}

#[derive(Debug, Deserialize)]
pub struct JobDescriptionRequest {
    pub jd_text: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct DraftRequest {
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SendInvitationsRequest {
    /// Replaces the stored draft before sending when present.
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SendInvitationsResponse {
    pub report: SendReport,
    pub session: SessionSnapshot,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> (StatusCode, Json<CreateSessionResponse>) {
    let (session_id, handle) = state
        .sessions
        .create(state.collaborators.clone(), request.candidates)
        .await;
    let session = handle.lock().await.snapshot();
    (
        StatusCode::CREATED,
        Json(CreateSessionResponse {
            session_id,
            session,
        }),
    )
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let handle = state.sessions.get(id).await?;
    let snapshot = handle.lock().await.snapshot();
    Ok(Json(snapshot))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/sessions/:id/weights
pub async fn handle_set_weights(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(weights): Json<WeightConfig>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let handle = state.sessions.get(id).await?;
    let mut controller = handle.lock().await;
    controller.set_weights(weights)?;
    Ok(Json(controller.snapshot()))
}

/// POST /api/v1/sessions/:id/job-description
pub async fn handle_submit_job_description(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<JobDescriptionRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let handle = state.sessions.get(id).await?;
    let mut controller = handle.lock().await;
    controller.submit_job_description(&request.jd_text).await?;
    Ok(Json(controller.snapshot()))
}

/// POST /api/v1/sessions/:id/messages
///
/// One user turn. Warnings (bad cutoff, weights off 100) come back in the
/// transcript with 200; only collaborator failures are errors.
pub async fn handle_submit_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<MessageRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let handle = state.sessions.get(id).await?;
    let mut controller = handle.lock().await;
    controller.submit_input(&request.text).await?;
    Ok(Json(controller.snapshot()))
}

/// POST /api/v1/sessions/:id/recipients/:index/toggle
pub async fn handle_toggle_recipient(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let handle = state.sessions.get(id).await?;
    let mut controller = handle.lock().await;
    controller.toggle_recipient(index)?;
    Ok(Json(controller.snapshot()))
}

/// PUT /api/v1/sessions/:id/draft
pub async fn handle_set_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<DraftRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let handle = state.sessions.get(id).await?;
    let mut controller = handle.lock().await;
    controller.set_draft(request.message);
    Ok(Json(controller.snapshot()))
}

/// POST /api/v1/sessions/:id/invitations
pub async fn handle_send_invitations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    request: Option<Json<SendInvitationsRequest>>,
) -> Result<Json<SendInvitationsResponse>, AppError> {
    let handle = state.sessions.get(id).await?;
    let mut controller = handle.lock().await;
    if let Some(message) = request.and_then(|Json(r)| r.message) {
        controller.set_draft(message);
    }
    let report = controller.send_invitations().await;
    Ok(Json(SendInvitationsResponse {
        report,
        session: controller.snapshot(),
    }))
}
