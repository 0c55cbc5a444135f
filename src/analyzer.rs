use crate::classifier::{ClassifierAdapter, Frame};
use crate::error::EngineError;
use crate::insight::InsightGenerator;
use crate::report::Report;
use crate::session::{FrameResult, SessionStore, SessionSummary};
use tracing::{debug, info, warn};

/// Orchestrates the analysis pipeline over a shared session store: frame
/// ingestion, summary computation, insight generation, and report export.
pub struct Analyzer {
    store: SessionStore,
    classifier: ClassifierAdapter,
}

impl Analyzer {
    pub fn new(store: SessionStore, classifier: ClassifierAdapter) -> Self {
        Self { store, classifier }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Classify one frame and append it to the session.
    ///
    /// The classifier call runs outside the session lock, so a slow model
    /// never serializes other sessions; the append re-checks ACTIVE in
    /// case the session closed mid-call. A classification failure aborts
    /// only this frame; the session remains usable.
    pub async fn ingest_frame(
        &self,
        session_id: &str,
        frame: Frame,
    ) -> Result<FrameResult, EngineError> {
        let session = self.store.get_session(session_id).await?;
        session.ensure_active().await?;

        let scores = self.classifier.classify(&frame).await?;

        let result = session.append_frame(scores, frame.captured_at).await?;
        debug!(
            "Session {session_id}: frame {} dominant={}",
            result.frame_index, result.dominant_emotion
        );
        Ok(result)
    }

    /// Compute summary statistics from the session's current frames.
    ///
    /// Read-only; does not require the session to be closed. Idempotent
    /// between ingestions.
    pub async fn summarize(&self, session_id: &str) -> Result<SessionSummary, EngineError> {
        let session = self.store.get_session(session_id).await?;
        let frames = session.frames().await;
        if frames.is_empty() {
            return Err(EngineError::EmptySession(session_id.to_string()));
        }
        Ok(SessionSummary::from_frames(&frames))
    }

    /// Generate insight text for a session's current summary.
    pub async fn generate_insight(
        &self,
        session_id: &str,
        generator: &dyn InsightGenerator,
    ) -> Result<String, EngineError> {
        let session = self.store.get_session(session_id).await?;
        let summary = self.summarize(session_id).await?;
        Ok(generator.generate(&summary, session.question()).await?)
    }

    /// Export a session's report. Export finalizes: the session is closed
    /// before the snapshot is taken, so the report can never drift
    /// afterwards.
    ///
    /// Insight failure never blocks export; the report is produced with
    /// `insight_text = None`. An empty session fails without being closed.
    pub async fn export(
        &self,
        session_id: &str,
        generator: Option<&dyn InsightGenerator>,
    ) -> Result<Report, EngineError> {
        let session = self.store.get_session(session_id).await?;
        if session.frame_count().await == 0 {
            return Err(EngineError::EmptySession(session_id.to_string()));
        }

        self.store.close_session(session_id).await?;

        let frames = session.frames().await;
        let summary = SessionSummary::from_frames(&frames);

        let insight_text = match generator {
            Some(generator) => match generator.generate(&summary, session.question()).await {
                Ok(text) => Some(text),
                Err(e) => {
                    warn!("Insight generation failed for {session_id}: {e}");
                    None
                }
            },
            None => None,
        };

        info!(
            "Exported report for session {session_id} ({} frames)",
            summary.frame_count
        );

        Ok(Report {
            session_id: session_id.to_string(),
            question: session.question().to_string(),
            created_at: session.created_at(),
            summary,
            insight_text,
        })
    }
}
