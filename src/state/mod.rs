//! Per-screen state machines.
//!
//! Each screen owns an input field, a request state machine, and the
//! screen-specific extras (history buffer, expand/collapse set). State is
//! mutated only through the methods here; rendering reads it and derives
//! everything else through `crate::projector`.

mod fact_check;
mod history;
mod input;
mod request;
mod sentiment;

pub use fact_check::FactCheckScreen;
pub use history::{HistoryBuffer, HistoryEntry, HISTORY_CAPACITY};
pub use input::InputField;
pub use request::RequestState;
pub use sentiment::{FetchMode, SentimentData, SentimentScreen};
