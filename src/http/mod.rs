//! HTTP API
//!
//! Thin request/response layer mapping 1:1 onto the engine operations:
//! session lifecycle, frame ingestion, summaries, insights, and report
//! export. Status-code mapping lives here; the engine knows nothing about
//! HTTP.

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
