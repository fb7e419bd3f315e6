//! Subreddit sentiment screen state.

use std::collections::HashSet;

use crate::models::{Post, SentimentTotals};
use crate::state::{InputField, RequestState};

/// Validation message shown when submitting an empty subreddit name.
pub const EMPTY_SUBREDDIT_MESSAGE: &str = "Please enter a subreddit name.";

/// Which backend endpoint the screen fetches from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// `GET /sentiment` - classified post list (the full view).
    #[default]
    Posts,
    /// `GET /analyze` - aggregated counts only.
    Totals,
}

impl FetchMode {
    /// Cycle to the other mode.
    pub fn toggle(&self) -> Self {
        match self {
            FetchMode::Posts => FetchMode::Totals,
            FetchMode::Totals => FetchMode::Posts,
        }
    }

    /// Display name shown in the screen header.
    pub fn display_name(&self) -> &'static str {
        match self {
            FetchMode::Posts => "posts",
            FetchMode::Totals => "totals",
        }
    }
}

/// Successful payload for the sentiment screen, one variant per endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum SentimentData {
    /// Post list from `/sentiment`.
    Posts(Vec<Post>),
    /// Aggregated counts from `/analyze`.
    Totals(SentimentTotals),
}

/// State for the sentiment screen: subreddit name in, classified posts
/// (or totals) out, with per-post expand/collapse toggles.
#[derive(Debug, Clone, Default)]
pub struct SentimentScreen {
    /// The subreddit name input.
    pub input: InputField,
    /// The single visible request for this screen.
    pub request: RequestState<SentimentData>,
    /// Which endpoint the next submit hits.
    pub mode: FetchMode,
    /// Indexes of posts whose body is expanded. Default collapsed.
    expanded: HashSet<usize>,
    /// Index of the post the list cursor is on.
    pub selected: usize,
    /// Sequence number of the most recent submit.
    current_seq: u64,
}

impl SentimentScreen {
    /// Create a fresh screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence number of the most recent submit.
    pub fn current_seq(&self) -> u64 {
        self.current_seq
    }

    /// Attempt a submit; same contract as the fact-checker screen.
    ///
    /// Returns the sequence number and the subreddit name to query, or
    /// None when the input was rejected client-side.
    pub fn submit(&mut self) -> Option<(u64, String)> {
        self.current_seq += 1;
        self.expanded.clear();
        if !self.input.is_valid() {
            self.request.reject(EMPTY_SUBREDDIT_MESSAGE);
            return None;
        }
        self.selected = 0;
        self.request.begin(self.current_seq);
        Some((self.current_seq, self.input.value().trim().to_string()))
    }

    /// Move the list cursor down, clamped to the post count.
    pub fn select_next(&mut self, post_count: usize) {
        if post_count > 0 && self.selected + 1 < post_count {
            self.selected += 1;
        }
    }

    /// Move the list cursor up.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Apply a resolution for the request with sequence `seq`.
    pub fn apply_result(&mut self, seq: u64, result: Result<SentimentData, String>) -> bool {
        self.request.resolve(seq, result)
    }

    /// Switch between post-list and totals mode. Pending work is
    /// superseded so a late resolution from the old mode cannot land.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggle();
        if self.request.is_pending() {
            self.request.reset();
        }
    }

    /// Toggle the expand state of the post at `index`, independent of all
    /// other posts.
    pub fn toggle_expanded(&mut self, index: usize) {
        if !self.expanded.remove(&index) {
            self.expanded.insert(index);
        }
    }

    /// True when the post at `index` is expanded.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Reset when the screen is left: discard any in-flight request's
    /// effect and collapse everything.
    pub fn reset_on_leave(&mut self) {
        self.request.reset();
        self.expanded.clear();
        self.selected = 0;
        self.input.clear();
    }
}
