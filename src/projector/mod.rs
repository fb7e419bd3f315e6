//! Pure projections from API payloads to display models.
//!
//! Everything in this module is a pure function of a successful payload:
//! same payload in, same derived values out, regardless of call order.
//! Rendering consumes these; nothing here touches screen state.

mod fact_check;
mod sentiment;

pub use fact_check::{badge_for, format_confidence, CategoryBadge};
pub use sentiment::{LabelCount, SentimentSummary};
