use crate::session::SessionSummary;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// The immutable exported artifact summarizing a session.
///
/// A snapshot: the session is closed at export time, so the underlying
/// data can never change after the report exists. Serializes to a
/// self-describing JSON document that round-trips losslessly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub session_id: String,
    pub question: String,
    pub created_at: DateTime<Utc>,
    pub summary: SessionSummary,
    pub insight_text: Option<String>,
}

impl Report {
    /// Write the report as pretty-printed JSON under `dir`, creating the
    /// directory if needed. Returns the file path.
    pub fn write_json(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir).context("Failed to create reports directory")?;

        let path = dir.join(format!("{}.json", self.session_id));
        let json = serde_json::to_string_pretty(self).context("Failed to encode report")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;

        info!("Report written: {}", path.display());
        Ok(path)
    }
}
