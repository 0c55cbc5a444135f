//! Session management and aggregation
//!
//! This module provides:
//! - `SessionStore`: registry owning all sessions and their lifecycle
//! - `Session`: per-interview frame accumulation with ordering guarantees
//! - `SessionSummary`: derived statistics and dominant-emotion ranking

mod session;
mod store;
mod summary;

pub use session::{FrameResult, Session, SessionStatus};
pub use store::SessionStore;
pub use summary::{SessionSummary, TimelineEntry, TopEmotion};
