//! Screening pipeline: provider dispatch, retry/backoff, fallback.

mod engine;
mod fallback;

pub use engine::{ScreenEngine, ScreenOutcome};
pub use fallback::{fallback_records, FALLBACK_LABEL};
