#![allow(dead_code)]

// Shared test doubles for the integration tests.

use async_trait::async_trait;
use emotrack::{
    Analyzer, ClassificationError, ClassifierAdapter, EmotionModel, Frame, InsightError,
    InsightGenerator, SessionStore, SessionSummary,
};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// A raw score map the way a DeepFace-style backend would report it.
pub fn scores(pairs: &[(&str, f32)]) -> HashMap<String, f32> {
    pairs.iter().map(|&(l, s)| (l.to_string(), s)).collect()
}

pub fn frame() -> Frame {
    Frame {
        data: vec![0u8; 16],
        captured_at: None,
    }
}

/// Model that always reports the same scores.
pub struct StaticModel {
    scores: HashMap<String, f32>,
}

impl StaticModel {
    pub fn new(scores: HashMap<String, f32>) -> Self {
        Self { scores }
    }
}

#[async_trait]
impl EmotionModel for StaticModel {
    async fn classify(&self, _frame: &Frame) -> Result<HashMap<String, f32>, ClassificationError> {
        Ok(self.scores.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Model that replays a scripted sequence of outcomes, one per call.
pub struct ScriptedModel {
    outcomes: Mutex<VecDeque<Result<HashMap<String, f32>, String>>>,
}

impl ScriptedModel {
    pub fn new(outcomes: Vec<Result<HashMap<String, f32>, String>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
        }
    }
}

#[async_trait]
impl EmotionModel for ScriptedModel {
    async fn classify(&self, _frame: &Frame) -> Result<HashMap<String, f32>, ClassificationError> {
        let outcome = self
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("scripted model exhausted");
        outcome.map_err(ClassificationError)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Insight generator returning fixed text.
pub struct StaticInsight(pub String);

#[async_trait]
impl InsightGenerator for StaticInsight {
    async fn generate(
        &self,
        _summary: &SessionSummary,
        _question: &str,
    ) -> Result<String, InsightError> {
        Ok(self.0.clone())
    }
}

/// Insight generator that always fails.
pub struct FailingInsight;

#[async_trait]
impl InsightGenerator for FailingInsight {
    async fn generate(
        &self,
        _summary: &SessionSummary,
        _question: &str,
    ) -> Result<String, InsightError> {
        Err(InsightError("generative backend offline".to_string()))
    }
}

pub fn analyzer_with(model: impl EmotionModel + 'static) -> Analyzer {
    Analyzer::new(SessionStore::new(), ClassifierAdapter::new(Box::new(model)))
}

/// Analyzer whose classifier always reports a confident `happy`.
pub fn happy_analyzer() -> Analyzer {
    analyzer_with(StaticModel::new(scores(&[("happy", 0.9), ("neutral", 0.1)])))
}
