use super::state::AppState;
use crate::classifier::Frame;
use crate::error::{EngineError, InsightError};
use crate::report::Report;
use crate::session::{SessionStatus, SessionSummary};
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    /// Interview question the candidate is answering
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: String,
    pub question: String,
    pub created_at: DateTime<Utc>,
    pub status: SessionStatus,
}

#[derive(Debug, Deserialize)]
pub struct IngestFrameParams {
    /// Capture time of the frame; ingestion time is used when omitted
    pub captured_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct SessionListEntry {
    pub session_id: String,
    pub question: String,
    pub created_at: DateTime<Utc>,
    pub status: SessionStatus,
    pub frame_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ListSessionsResponse {
    pub total_sessions: usize,
    pub sessions: Vec<SessionListEntry>,
}

#[derive(Debug, Serialize)]
pub struct CloseSessionResponse {
    pub session_id: String,
    pub status: SessionStatus,
}

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub session_id: String,
    pub question: String,
    pub summary: SessionSummary,
    pub insight: String,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub path: String,
    pub report: Report,
}

#[derive(Debug, Serialize)]
pub struct DeleteSessionResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub insight_configured: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Map engine errors onto HTTP status codes
fn engine_error(err: EngineError) -> Response {
    let status = match &err {
        EngineError::NotFound(_) => StatusCode::NOT_FOUND,
        EngineError::InvalidState(_) | EngineError::EmptySession(_) => StatusCode::CONFLICT,
        EngineError::Classification(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EngineError::InsightUnavailable(_) => StatusCode::BAD_GATEWAY,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /sessions
/// Start a new analysis session
pub async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> impl IntoResponse {
    let store = state.analyzer.store();
    let session_id = store.create_session(req.question).await;

    // Creation always succeeds; the lookup can only miss if the session was
    // already deleted by a concurrent request.
    match store.get_session(&session_id).await {
        Ok(session) => (
            StatusCode::CREATED,
            Json(CreateSessionResponse {
                session_id,
                question: session.question().to_string(),
                created_at: session.created_at(),
                status: session.status().await,
            }),
        )
            .into_response(),
        Err(e) => engine_error(e),
    }
}

/// GET /sessions
/// List all sessions in creation order
pub async fn list_sessions(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.analyzer.store();
    let ids = store.list_sessions().await;

    let mut sessions = Vec::with_capacity(ids.len());
    for session_id in ids {
        // Sessions removed between listing and lookup are skipped
        if let Ok(session) = store.get_session(&session_id).await {
            sessions.push(SessionListEntry {
                session_id,
                question: session.question().to_string(),
                created_at: session.created_at(),
                status: session.status().await,
                frame_count: session.frame_count().await,
            });
        }
    }

    Json(ListSessionsResponse {
        total_sessions: sessions.len(),
        sessions,
    })
}

/// POST /sessions/:session_id/frames
/// Classify and ingest a single frame (raw image bytes as the body)
pub async fn ingest_frame(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Query(params): Query<IngestFrameParams>,
    body: Bytes,
) -> impl IntoResponse {
    let frame = Frame {
        data: body.to_vec(),
        captured_at: params.captured_at,
    };

    match state.analyzer.ingest_frame(&session_id, frame).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            error!("Frame ingestion failed for {session_id}: {e}");
            engine_error(e)
        }
    }
}

/// GET /sessions/:session_id/summary
/// Get aggregated statistics for a session
pub async fn get_summary(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    match state.analyzer.summarize(&session_id).await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => engine_error(e),
    }
}

/// POST /sessions/:session_id/close
/// Close a session (idempotent)
pub async fn close_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    match state.analyzer.store().close_session(&session_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(CloseSessionResponse {
                session_id,
                status: SessionStatus::Closed,
            }),
        )
            .into_response(),
        Err(e) => engine_error(e),
    }
}

/// POST /sessions/:session_id/insights
/// Generate insight text for a session's current summary
pub async fn generate_insights(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let Some(generator) = state.insight.clone() else {
        return engine_error(EngineError::InsightUnavailable(InsightError(
            "no insight backend configured".to_string(),
        )));
    };

    let insight = match state
        .analyzer
        .generate_insight(&session_id, generator.as_ref())
        .await
    {
        Ok(text) => text,
        Err(e) => return engine_error(e),
    };

    let summary = match state.analyzer.summarize(&session_id).await {
        Ok(summary) => summary,
        Err(e) => return engine_error(e),
    };

    let question = match state.analyzer.store().get_session(&session_id).await {
        Ok(session) => session.question().to_string(),
        Err(e) => return engine_error(e),
    };

    (
        StatusCode::OK,
        Json(InsightsResponse {
            session_id,
            question,
            summary,
            insight,
        }),
    )
        .into_response()
}

/// POST /sessions/:session_id/export
/// Export the session report (finalizes the session) and write it to disk
pub async fn export_report(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let generator = state.insight.clone();
    let report = match state
        .analyzer
        .export(&session_id, generator.as_deref())
        .await
    {
        Ok(report) => report,
        Err(e) => return engine_error(e),
    };

    match report.write_json(&state.reports_dir) {
        Ok(path) => {
            info!("Report exported for session {session_id}");
            (
                StatusCode::OK,
                Json(ExportResponse {
                    path: path.display().to_string(),
                    report,
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to write report for {session_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to write report: {e}"),
                }),
            )
                .into_response()
        }
    }
}

/// DELETE /sessions/:session_id
/// Remove a session entirely
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    match state.analyzer.store().remove_session(&session_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(DeleteSessionResponse {
                message: format!("Session {session_id} deleted"),
            }),
        )
            .into_response(),
        Err(e) => engine_error(e),
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
        insight_configured: state.insight.is_some(),
    })
}
