use crate::emotion::{Emotion, EmotionScores};
use crate::error::ClassificationError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// One still frame sampled from an interview video.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Encoded image bytes (the format is the model backend's concern)
    pub data: Vec<u8>,

    /// Capture time, if the caller knows it; ingestion time is used otherwise
    pub captured_at: Option<DateTime<Utc>>,
}

/// External emotion classification capability.
///
/// Backends:
/// - HTTP inference service (production, see `HttpEmotionModel`)
/// - Scripted/static models (tests)
#[async_trait]
pub trait EmotionModel: Send + Sync {
    /// Score a frame, returning one value per emotion label.
    ///
    /// Fails when no usable face is found or the backend itself errors.
    /// Never retried by the engine; retry policy belongs to the caller.
    async fn classify(&self, frame: &Frame) -> Result<HashMap<String, f32>, ClassificationError>;

    /// Get backend name for logging
    fn name(&self) -> &str;
}

/// Wraps an `EmotionModel` and normalizes its output into the fixed
/// vocabulary schema. Stateless; performs no aggregation.
pub struct ClassifierAdapter {
    model: Box<dyn EmotionModel>,
}

impl ClassifierAdapter {
    pub fn new(model: Box<dyn EmotionModel>) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Classify one frame, queried exactly once per call.
    pub async fn classify(&self, frame: &Frame) -> Result<EmotionScores, ClassificationError> {
        let raw = self.model.classify(frame).await?;
        normalize_scores(raw)
    }
}

/// Map raw label→score output onto the full vocabulary: missing labels are
/// filled with 0.0, unknown labels and out-of-range values fail the frame.
///
/// DeepFace-style backends report percentages; a vector whose maximum
/// exceeds 1.0 is treated as the 0–100 scale and rescaled.
fn normalize_scores(raw: HashMap<String, f32>) -> Result<EmotionScores, ClassificationError> {
    let max = raw.values().copied().fold(0.0f32, f32::max);
    let scale = if max > 1.0 { 0.01 } else { 1.0 };

    let mut scores: EmotionScores = Emotion::ALL.iter().map(|&e| (e, 0.0)).collect();
    for (label, value) in raw {
        let emotion = Emotion::parse(&label)
            .ok_or_else(|| ClassificationError(format!("unknown emotion label: {label}")))?;
        let value = value * scale;
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ClassificationError(format!(
                "score out of range for {emotion}: {value}"
            )));
        }
        scores.insert(emotion, value);
    }
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_scale_passes_through() {
        let raw = HashMap::from([("happy".to_string(), 0.8), ("sad".to_string(), 0.1)]);
        let scores = normalize_scores(raw).unwrap();
        assert_eq!(scores[&Emotion::Happy], 0.8);
        assert_eq!(scores[&Emotion::Sad], 0.1);
    }

    #[test]
    fn percentage_scale_is_rescaled() {
        let raw = HashMap::from([("happy".to_string(), 80.0), ("neutral".to_string(), 20.0)]);
        let scores = normalize_scores(raw).unwrap();
        assert!((scores[&Emotion::Happy] - 0.8).abs() < 1e-6);
        assert!((scores[&Emotion::Neutral] - 0.2).abs() < 1e-6);
    }

    #[test]
    fn missing_labels_are_filled_with_zero() {
        let raw = HashMap::from([("fear".to_string(), 1.0)]);
        let scores = normalize_scores(raw).unwrap();
        assert_eq!(scores.len(), Emotion::ALL.len());
        assert_eq!(scores[&Emotion::Disgust], 0.0);
    }

    #[test]
    fn unknown_label_fails() {
        let raw = HashMap::from([("boredom".to_string(), 0.5)]);
        assert!(normalize_scores(raw).is_err());
    }

    #[test]
    fn nan_fails() {
        let raw = HashMap::from([("happy".to_string(), f32::NAN)]);
        assert!(normalize_scores(raw).is_err());
    }

    #[test]
    fn value_above_percentage_range_fails() {
        let raw = HashMap::from([("happy".to_string(), 150.0)]);
        assert!(normalize_scores(raw).is_err());
    }
}
