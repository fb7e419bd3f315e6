//! Wire models for the prediction API.
//!
//! These types mirror the backend's JSON schemas exactly; everything
//! display-related is derived from them by `crate::projector`.

mod prediction;
mod sentiment;

pub use prediction::{Category, PredictionResponse};
pub use sentiment::{Post, SentimentLabel, SentimentTotals};
