use crate::chat::store::SessionStore;
use crate::collaborators::Collaborators;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Collaborators every new session is wired to. Chosen at startup from config.
    pub collaborators: Collaborators,
    pub sessions: SessionStore,
}
