use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Fixed emotion vocabulary shared by every frame in the system.
///
/// Declaration order is the canonical priority order: it breaks exact-score
/// ties in dominant-emotion selection and ranking, so identical score
/// vectors always resolve the same way.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Angry,
    Disgust,
    Fear,
    Happy,
    Sad,
    Surprise,
    Neutral,
}

impl Emotion {
    /// The full vocabulary in priority order.
    pub const ALL: [Emotion; 7] = [
        Emotion::Angry,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Surprise,
        Emotion::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Angry => "angry",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Surprise => "surprise",
            Emotion::Neutral => "neutral",
        }
    }

    /// Parse a classifier label; `None` for anything outside the vocabulary.
    pub fn parse(label: &str) -> Option<Emotion> {
        match label {
            "angry" => Some(Emotion::Angry),
            "disgust" => Some(Emotion::Disgust),
            "fear" => Some(Emotion::Fear),
            "happy" => Some(Emotion::Happy),
            "sad" => Some(Emotion::Sad),
            "surprise" => Some(Emotion::Surprise),
            "neutral" => Some(Emotion::Neutral),
            _ => None,
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One probability per vocabulary label, each in [0, 1].
///
/// The adapter guarantees every key is present; values need not sum to 1
/// (classifier noise is tolerated).
pub type EmotionScores = BTreeMap<Emotion, f32>;

/// Argmax over a score vector. Iteration follows priority order and only a
/// strictly greater score displaces the current best, so exact ties resolve
/// to the earlier vocabulary label.
pub fn dominant_emotion(scores: &EmotionScores) -> Emotion {
    let mut best = Emotion::Angry;
    let mut best_score = f32::NEG_INFINITY;
    for (&emotion, &score) in scores {
        if score > best_score {
            best = emotion;
            best_score = score;
        }
    }
    best
}
