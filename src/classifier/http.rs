use super::adapter::{EmotionModel, Frame};
use crate::error::ClassificationError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

/// Response shape of the remote inference service
#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    emotions: HashMap<String, f32>,
}

/// Emotion model backed by a remote HTTP inference service.
///
/// Posts the raw frame bytes and expects `{"emotions": {label: score}}`.
/// The request timeout doubles as the only cancellation point for callers
/// wrapping ingestion.
pub struct HttpEmotionModel {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpEmotionModel {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build classifier HTTP client")?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl EmotionModel for HttpEmotionModel {
    async fn classify(&self, frame: &Frame) -> Result<HashMap<String, f32>, ClassificationError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/octet-stream")
            .body(frame.data.clone())
            .send()
            .await
            .map_err(|e| ClassificationError(format!("classifier request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(ClassificationError(format!(
                "classifier returned {}",
                response.status()
            )));
        }

        let body: ClassifyResponse = response
            .json()
            .await
            .map_err(|e| ClassificationError(format!("invalid classifier response: {e}")))?;

        Ok(body.emotions)
    }

    fn name(&self) -> &str {
        "http"
    }
}
