use crate::emotion::{dominant_emotion, Emotion, EmotionScores};
use crate::error::EngineError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

/// Session lifecycle state. Closing is a one-way transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Active,
    Closed,
}

/// One classified frame. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameResult {
    /// 0-based, gapless sequence number within the session
    pub frame_index: usize,

    /// Capture or ingestion time; non-decreasing across the session
    pub timestamp: DateTime<Utc>,

    /// One probability per vocabulary label
    pub emotion_scores: EmotionScores,

    /// Argmax over `emotion_scores`, ties broken by vocabulary order
    pub dominant_emotion: Emotion,
}

/// Mutable per-session state, guarded by a single lock so frame appends
/// are serialized and readers never observe a torn update.
#[derive(Debug)]
struct SessionState {
    status: SessionStatus,
    frames: Vec<FrameResult>,
}

/// One interview's analysis lifecycle, from start to export.
///
/// Owned exclusively by the `SessionStore`; status transitions go through
/// the store, frame appends through the engine.
pub struct Session {
    session_id: String,
    question: String,
    created_at: DateTime<Utc>,
    state: Mutex<SessionState>,
}

impl Session {
    pub(crate) fn new(question: String) -> Self {
        Self {
            session_id: format!("session-{}", uuid::Uuid::new_v4()),
            question,
            created_at: Utc::now(),
            state: Mutex::new(SessionState {
                status: SessionStatus::Active,
                frames: Vec::new(),
            }),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub async fn status(&self) -> SessionStatus {
        self.state.lock().await.status
    }

    pub async fn frame_count(&self) -> usize {
        self.state.lock().await.frames.len()
    }

    /// Copy-on-read snapshot of the frame list, safe to consume while
    /// ingestion continues.
    pub async fn frames(&self) -> Vec<FrameResult> {
        self.state.lock().await.frames.clone()
    }

    /// Fail fast if the session no longer accepts frames.
    pub(crate) async fn ensure_active(&self) -> Result<(), EngineError> {
        if self.state.lock().await.status != SessionStatus::Active {
            return Err(EngineError::InvalidState(self.session_id.clone()));
        }
        Ok(())
    }

    /// Append a classified frame, assigning the next gapless index.
    ///
    /// Status is re-checked under the lock: the session may have closed
    /// while the frame was out being classified. Timestamps are clamped to
    /// the previous frame's so the sequence stays non-decreasing under
    /// clock skew or out-of-order capture times.
    pub(crate) async fn append_frame(
        &self,
        scores: EmotionScores,
        captured_at: Option<DateTime<Utc>>,
    ) -> Result<FrameResult, EngineError> {
        let mut state = self.state.lock().await;
        if state.status != SessionStatus::Active {
            return Err(EngineError::InvalidState(self.session_id.clone()));
        }

        let mut timestamp = captured_at.unwrap_or_else(Utc::now);
        if let Some(last) = state.frames.last() {
            if timestamp < last.timestamp {
                timestamp = last.timestamp;
            }
        }

        let frame = FrameResult {
            frame_index: state.frames.len(),
            timestamp,
            dominant_emotion: dominant_emotion(&scores),
            emotion_scores: scores,
        };
        state.frames.push(frame.clone());
        Ok(frame)
    }

    /// One-way ACTIVE → CLOSED transition. Closing a closed session is a
    /// no-op.
    pub(crate) async fn close(&self) {
        let mut state = self.state.lock().await;
        if state.status == SessionStatus::Active {
            state.status = SessionStatus::Closed;
            debug!("Session {} closed", self.session_id);
        }
    }
}
