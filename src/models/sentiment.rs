//! Sentiment payloads returned by `GET /sentiment` and `GET /analyze`.

use serde::{Deserialize, Serialize};

/// Per-post sentiment classification.
///
/// The backend only emits the three known labels, but a value outside
/// them lands in [`SentimentLabel::Unclassified`] so one odd post cannot
/// sink the whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    /// Positive sentiment.
    Positive,
    /// Neutral sentiment.
    Neutral,
    /// Negative sentiment.
    Negative,
    /// Unrecognized label from the backend.
    #[serde(other)]
    Unclassified,
}

impl SentimentLabel {
    /// The three chartable labels in their fixed enumeration order.
    ///
    /// This order is the deterministic tie-break for the dominant label
    /// and the order of the chart series.
    pub const CHART_ORDER: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    /// Display name for the label.
    pub fn display_name(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Unclassified => "Unclassified",
        }
    }
}

/// A single post from `GET /sentiment?subreddit=<name>`.
///
/// The backend capitalizes field names and has shipped the body text as
/// both `Content` and `Text`; the alias accepts either.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    /// Post title.
    #[serde(rename = "Title")]
    pub title: String,
    /// Sentiment label assigned by the model.
    #[serde(rename = "Sentiment")]
    pub sentiment: SentimentLabel,
    /// Optional post body.
    #[serde(rename = "Content", alias = "Text", default)]
    pub content: Option<String>,
}

/// Aggregated counts from `GET /analyze?subreddit=<name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct SentimentTotals {
    /// Number of positive posts.
    pub positive: u32,
    /// Number of negative posts.
    pub negative: u32,
    /// Number of neutral posts.
    pub neutral: u32,
}

impl SentimentTotals {
    /// Count for a chartable label. Unclassified is always zero here;
    /// the totals endpoint never reports it.
    pub fn count(&self, label: SentimentLabel) -> u32 {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Unclassified => 0,
        }
    }

    /// Total number of posts represented.
    pub fn total(&self) -> u32 {
        self.positive + self.negative + self.neutral
    }
}
