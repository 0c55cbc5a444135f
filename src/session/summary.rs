use super::session::FrameResult;
use crate::emotion::Emotion;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// One timeline entry: which emotion dominated a frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub frame_index: usize,
    pub timestamp: DateTime<Utc>,
    pub dominant_emotion: Emotion,
}

/// Ranked entry in the top-emotions list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopEmotion {
    pub emotion: Emotion,
    /// Number of frames where this emotion was dominant
    pub frames: usize,
}

/// Derived statistics over a session's frames.
///
/// Recomputed on demand from the frame list; never the source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub frame_count: usize,

    /// Cumulative score sum per emotion across all frames
    pub emotion_totals: BTreeMap<Emotion, f64>,

    /// Frames where each emotion was dominant; values sum to `frame_count`
    pub emotion_frame_counts: BTreeMap<Emotion, usize>,

    /// At most three emotions, ranked per `rank_emotions`
    pub top_emotions: Vec<TopEmotion>,

    pub timeline: Vec<TimelineEntry>,
}

impl SessionSummary {
    /// Single-pass aggregation over a frame snapshot.
    pub fn from_frames(frames: &[FrameResult]) -> Self {
        let mut emotion_totals: BTreeMap<Emotion, f64> =
            Emotion::ALL.iter().map(|&e| (e, 0.0)).collect();
        let mut emotion_frame_counts: BTreeMap<Emotion, usize> =
            Emotion::ALL.iter().map(|&e| (e, 0)).collect();
        let mut timeline = Vec::with_capacity(frames.len());

        for frame in frames {
            for (&emotion, &score) in &frame.emotion_scores {
                *emotion_totals.entry(emotion).or_default() += f64::from(score);
            }
            *emotion_frame_counts.entry(frame.dominant_emotion).or_default() += 1;
            timeline.push(TimelineEntry {
                frame_index: frame.frame_index,
                timestamp: frame.timestamp,
                dominant_emotion: frame.dominant_emotion,
            });
        }

        let top_emotions = rank_emotions(&emotion_frame_counts, &emotion_totals);

        Self {
            frame_count: frames.len(),
            emotion_totals,
            emotion_frame_counts,
            top_emotions,
            timeline,
        }
    }
}

/// Rank emotions by dominant-frame count descending, ties by higher
/// cumulative score, further ties by vocabulary priority order. Emotions
/// that never dominated a frame are excluded; at most three entries.
fn rank_emotions(
    counts: &BTreeMap<Emotion, usize>,
    totals: &BTreeMap<Emotion, f64>,
) -> Vec<TopEmotion> {
    let mut ranked: Vec<Emotion> = Emotion::ALL.to_vec();
    ranked.sort_by(|a, b| {
        counts[b]
            .cmp(&counts[a])
            .then_with(|| totals[b].partial_cmp(&totals[a]).unwrap_or(Ordering::Equal))
            .then_with(|| a.cmp(b))
    });

    ranked
        .into_iter()
        .filter(|e| counts[e] > 0)
        .take(3)
        .map(|emotion| TopEmotion {
            emotion,
            frames: counts[&emotion],
        })
        .collect()
}
