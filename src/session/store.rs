use super::session::Session;
use crate::error::EngineError;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

#[derive(Default)]
struct StoreState {
    sessions: HashMap<String, Arc<Session>>,
    /// Creation order, for stable listing
    order: Vec<String>,
}

/// Registry of analysis sessions (session_id → session).
///
/// The store is the only place session identity is created or status
/// changes. Cloning shares the same backing map; operations on different
/// sessions proceed independently.
#[derive(Clone, Default)]
pub struct SessionStore {
    state: Arc<RwLock<StoreState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new ACTIVE session and return its id. Always succeeds.
    pub async fn create_session(&self, question: impl Into<String>) -> String {
        let session = Arc::new(Session::new(question.into()));
        let session_id = session.session_id().to_string();

        let mut state = self.state.write().await;
        state.order.push(session_id.clone());
        state.sessions.insert(session_id.clone(), session);

        info!("Created session {session_id}");
        session_id
    }

    pub async fn get_session(&self, session_id: &str) -> Result<Arc<Session>, EngineError> {
        self.state
            .read()
            .await
            .sessions
            .get(session_id)
            .cloned()
            .ok_or_else(|| EngineError::NotFound(session_id.to_string()))
    }

    /// Transition ACTIVE → CLOSED. Idempotent: closing a closed session is
    /// a no-op, not an error.
    pub async fn close_session(&self, session_id: &str) -> Result<(), EngineError> {
        let session = self.get_session(session_id).await?;
        session.close().await;
        Ok(())
    }

    /// Drop a session entirely.
    pub async fn remove_session(&self, session_id: &str) -> Result<(), EngineError> {
        let mut state = self.state.write().await;
        if state.sessions.remove(session_id).is_none() {
            return Err(EngineError::NotFound(session_id.to_string()));
        }
        state.order.retain(|id| id != session_id);
        info!("Removed session {session_id}");
        Ok(())
    }

    /// Session ids in creation order. Returns a snapshot, so re-querying
    /// is always safe.
    pub async fn list_sessions(&self) -> Vec<String> {
        self.state.read().await.order.clone()
    }
}
