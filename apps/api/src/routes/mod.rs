pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::chat::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/weights",
            put(handlers::handle_set_weights),
        )
        .route(
            "/api/v1/sessions/:id/job-description",
            post(handlers::handle_submit_job_description),
        )
        .route(
            "/api/v1/sessions/:id/messages",
            post(handlers::handle_submit_message),
        )
        .route(
            "/api/v1/sessions/:id/recipients/:index/toggle",
            post(handlers::handle_toggle_recipient),
        )
        .route("/api/v1/sessions/:id/draft", put(handlers::handle_set_draft))
        .route(
            "/api/v1/sessions/:id/invitations",
            post(handlers::handle_send_invitations),
        )
        .with_state(state)
}
