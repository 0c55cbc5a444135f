use crate::error::InsightError;
use crate::session::SessionSummary;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Capability that turns aggregated statistics into recruiter-facing
/// commentary.
///
/// Best-effort: callers tolerate failure, and report export proceeds
/// without insight text when generation errors.
#[async_trait]
pub trait InsightGenerator: Send + Sync {
    async fn generate(
        &self,
        summary: &SessionSummary,
        question: &str,
    ) -> Result<String, InsightError>;
}

#[derive(Serialize)]
struct InsightRequest<'a> {
    question: &'a str,
    summary: &'a SessionSummary,
}

#[derive(Deserialize)]
struct InsightResponse {
    text: String,
}

/// Insight generator backed by a remote generative service.
///
/// Posts `{question, summary}` and expects `{"text": "..."}`.
pub struct HttpInsightGenerator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpInsightGenerator {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build insight HTTP client")?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl InsightGenerator for HttpInsightGenerator {
    async fn generate(
        &self,
        summary: &SessionSummary,
        question: &str,
    ) -> Result<String, InsightError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&InsightRequest { question, summary })
            .send()
            .await
            .map_err(|e| InsightError(format!("insight request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(InsightError(format!(
                "insight service returned {}",
                response.status()
            )));
        }

        let body: InsightResponse = response
            .json()
            .await
            .map_err(|e| InsightError(format!("invalid insight response: {e}")))?;

        Ok(body.text)
    }
}
