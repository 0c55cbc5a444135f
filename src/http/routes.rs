use super::handlers;
use super::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Session lifecycle
        .route("/sessions", post(handlers::create_session))
        .route("/sessions", get(handlers::list_sessions))
        .route("/sessions/:session_id", delete(handlers::delete_session))
        .route("/sessions/:session_id/close", post(handlers::close_session))
        // Frame ingestion
        .route("/sessions/:session_id/frames", post(handlers::ingest_frame))
        // Aggregation queries
        .route("/sessions/:session_id/summary", get(handlers::get_summary))
        .route(
            "/sessions/:session_id/insights",
            post(handlers::generate_insights),
        )
        .route(
            "/sessions/:session_id/export",
            post(handlers::export_report),
        )
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
