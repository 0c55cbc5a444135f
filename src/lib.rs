pub mod analyzer;
pub mod classifier;
pub mod config;
pub mod emotion;
pub mod error;
pub mod http;
pub mod insight;
pub mod report;
pub mod session;

pub use analyzer::Analyzer;
pub use classifier::{ClassifierAdapter, EmotionModel, Frame, HttpEmotionModel};
pub use config::Config;
pub use emotion::{dominant_emotion, Emotion, EmotionScores};
pub use error::{ClassificationError, EngineError, InsightError};
pub use http::{create_router, AppState};
pub use insight::{HttpInsightGenerator, InsightGenerator};
pub use report::Report;
pub use session::{
    FrameResult, Session, SessionStatus, SessionStore, SessionSummary, TimelineEntry, TopEmotion,
};
