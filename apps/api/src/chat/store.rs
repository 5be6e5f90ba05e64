use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::info;
use uuid::Uuid;

use crate::chat::controller::ConversationController;
use crate::collaborators::Collaborators;
use crate::errors::AppError;
use crate::models::candidate::ParsedResume;

/// A live conversation. The mutex makes each session single-actor: one turn
/// finishes before the next starts.
pub type SessionHandle = Arc<Mutex<ConversationController>>;

/// In-memory registry of screening sessions, keyed by id.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SessionHandle>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(
        &self,
        collaborators: Collaborators,
        candidates: Vec<ParsedResume>,
    ) -> (Uuid, SessionHandle) {
        let id = Uuid::new_v4();
        let count = candidates.len();
        let handle = Arc::new(Mutex::new(ConversationController::new(
            collaborators,
            candidates,
        )));
        self.sessions.write().await.insert(id, handle.clone());
        info!(session_id = %id, candidates = count, "Screening session created");
        (id, handle)
    }

    pub async fn get(&self, id: Uuid) -> Result<SessionHandle, AppError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
    }

    /// Sessions live until removed here; there is no idle expiry.
    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
        info!(session_id = %id, "Screening session closed");
        Ok(())
    }
}
