//! Emotion classification adapter
//!
//! The external classifier is modeled as a single-method capability
//! (`EmotionModel`) so any backend can be substituted without touching the
//! aggregation core. `ClassifierAdapter` normalizes raw model output into
//! the fixed-schema score vector the rest of the engine relies on.

mod adapter;
mod http;

pub use adapter::{ClassifierAdapter, EmotionModel, Frame};
pub use http::HttpEmotionModel;
