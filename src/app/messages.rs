//! AppMessage enum for async communication within the application.

use crate::models::PredictionResponse;
use crate::state::SentimentData;

/// Messages received from async operations (request resolutions, timers).
///
/// Every message carries the sequence number of the submit that started
/// it; the screens discard anything stale.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A `/predict` call resolved.
    PredictionResolved {
        seq: u64,
        result: Result<PredictionResponse, String>,
    },
    /// A `/sentiment` or `/analyze` call resolved.
    SentimentResolved {
        seq: u64,
        result: Result<SentimentData, String>,
    },
    /// The cosmetic confidence-bar delay elapsed.
    ConfidenceRevealElapsed { seq: u64 },
}
