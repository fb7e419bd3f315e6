//! Fact-checker screen state.

use crate::models::PredictionResponse;
use crate::state::{HistoryBuffer, HistoryEntry, InputField, RequestState};

/// Validation message shown when submitting empty text.
pub const EMPTY_TEXT_MESSAGE: &str = "Please enter some text.";

/// State for the fact-checker screen: free text in, one prediction out,
/// plus the bounded history of past results.
#[derive(Debug, Clone, Default)]
pub struct FactCheckScreen {
    /// The user's raw text input.
    pub input: InputField,
    /// The single visible request for this screen.
    pub request: RequestState<PredictionResponse>,
    /// Last five successful results, most recent first.
    pub history: HistoryBuffer,
    /// True once the cosmetic reveal delay after a success has elapsed.
    pub confidence_revealed: bool,
    /// Sequence number of the most recent submit.
    current_seq: u64,
    /// The text that was sent with the most recent valid submit. History
    /// entries are built from this, not from the live input, which the
    /// user may have edited while the request was outstanding.
    submitted_text: String,
}

impl FactCheckScreen {
    /// Create a fresh screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence number of the most recent submit.
    pub fn current_seq(&self) -> u64 {
        self.current_seq
    }

    /// Attempt a submit.
    ///
    /// Invalid input is rejected client-side with a validation message and
    /// no network call; it still allocates a sequence number so any prior
    /// pending request is superseded and cannot overwrite the message.
    /// Valid input transitions to Pending and returns the sequence number
    /// plus the text to send.
    pub fn submit(&mut self) -> Option<(u64, String)> {
        self.current_seq += 1;
        self.confidence_revealed = false;
        if !self.input.is_valid() {
            self.request.reject(EMPTY_TEXT_MESSAGE);
            return None;
        }
        self.request.begin(self.current_seq);
        self.submitted_text = self.input.value().to_string();
        Some((self.current_seq, self.submitted_text.clone()))
    }

    /// Apply a resolution for the request with sequence `seq`.
    ///
    /// A history entry is recorded iff the resolution is applied and
    /// successful. The entry carries the text the request was submitted
    /// with, so edits made while the call was outstanding cannot pair a
    /// prediction with text it was never asked about. Returns true when
    /// the visible state changed.
    pub fn apply_result(&mut self, seq: u64, result: Result<PredictionResponse, String>) -> bool {
        let entry = result.as_ref().ok().map(|payload| {
            HistoryEntry::new(
                self.submitted_text.clone(),
                payload.prediction,
                payload.confidence,
            )
        });
        let applied = self.request.resolve(seq, result);
        if applied {
            if let Some(entry) = entry {
                self.history.record(entry);
            }
        }
        applied
    }

    /// Mark the confidence bar as revealed, if `seq` is still current and
    /// the request actually succeeded. Stale timers are ignored.
    pub fn reveal_confidence(&mut self, seq: u64) {
        if seq == self.current_seq && self.request.success().is_some() {
            self.confidence_revealed = true;
        }
    }

    /// Reset when the screen is left: discard any in-flight request's
    /// effect, clear the history and the input.
    pub fn reset_on_leave(&mut self) {
        self.request.reset();
        self.history.clear();
        self.input.clear();
        self.submitted_text.clear();
        self.confidence_revealed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn payload(category: Category, confidence: f64) -> PredictionResponse {
        PredictionResponse {
            prediction: category,
            confidence,
        }
    }

    #[test]
    fn test_empty_submit_is_rejected_without_request() {
        let mut screen = FactCheckScreen::new();
        assert!(screen.submit().is_none());
        assert_eq!(screen.request.failure(), Some(EMPTY_TEXT_MESSAGE));
    }

    #[test]
    fn test_whitespace_submit_is_rejected() {
        let mut screen = FactCheckScreen::new();
        screen.input.set_value("   ");
        assert!(screen.submit().is_none());
        assert_eq!(screen.request.failure(), Some(EMPTY_TEXT_MESSAGE));
    }

    #[test]
    fn test_valid_submit_goes_pending() {
        let mut screen = FactCheckScreen::new();
        screen.input.set_value("The sky is blue");
        let (seq, text) = screen.submit().unwrap();
        assert_eq!(text, "The sky is blue");
        assert!(screen.request.is_pending());

        assert!(screen.apply_result(seq, Ok(payload(Category::Entailment, 0.91))));
        assert_eq!(screen.request.success().unwrap().confidence, 0.91);
        assert_eq!(screen.history.len(), 1);
        assert_eq!(screen.history.entries()[0].input_text, "The sky is blue");
    }

    #[test]
    fn test_failure_records_no_history() {
        let mut screen = FactCheckScreen::new();
        screen.input.set_value("claim");
        let (seq, _) = screen.submit().unwrap();
        screen.apply_result(seq, Err("server down".to_string()));
        assert!(screen.history.is_empty());
        assert_eq!(screen.request.failure(), Some("server down"));
    }

    #[test]
    fn test_supersede_only_latest_wins() {
        let mut screen = FactCheckScreen::new();
        screen.input.set_value("test2");
        let (old_seq, _) = screen.submit().unwrap();

        screen.input.set_value("test");
        let (new_seq, _) = screen.submit().unwrap();

        // The superseded request resolves first and must not be shown
        // nor recorded in history.
        assert!(!screen.apply_result(old_seq, Ok(payload(Category::Contradiction, 0.4))));
        assert!(screen.request.is_pending());
        assert!(screen.history.is_empty());

        assert!(screen.apply_result(new_seq, Ok(payload(Category::Entailment, 0.9))));
        assert_eq!(
            screen.request.success().unwrap().prediction,
            Category::Entailment
        );
        assert_eq!(screen.history.len(), 1);
        assert_eq!(screen.history.entries()[0].input_text, "test");
    }

    #[test]
    fn test_history_keeps_submitted_text_despite_edits() {
        let mut screen = FactCheckScreen::new();
        screen.input.set_value("The sky is blue");
        let (seq, _) = screen.submit().unwrap();

        // Editing while the request is outstanding must not change what
        // the history pairs with the prediction.
        screen.input.set_value("The sky is green");
        assert!(screen.apply_result(seq, Ok(payload(Category::Entailment, 0.9))));
        assert_eq!(screen.history.entries()[0].input_text, "The sky is blue");
    }

    #[test]
    fn test_invalid_submit_supersedes_pending() {
        let mut screen = FactCheckScreen::new();
        screen.input.set_value("claim");
        let (seq, _) = screen.submit().unwrap();

        screen.input.clear();
        assert!(screen.submit().is_none());

        // Late resolution of the superseded call must not replace the
        // validation message.
        assert!(!screen.apply_result(seq, Ok(payload(Category::Neutral, 0.5))));
        assert_eq!(screen.request.failure(), Some(EMPTY_TEXT_MESSAGE));
        assert!(screen.history.is_empty());
    }

    #[test]
    fn test_reveal_only_for_current_success() {
        let mut screen = FactCheckScreen::new();
        screen.input.set_value("a");
        let (seq, _) = screen.submit().unwrap();
        screen.apply_result(seq, Ok(payload(Category::Neutral, 0.7)));

        screen.reveal_confidence(seq);
        assert!(screen.confidence_revealed);

        // New submit hides the bar again; a stale reveal timer is ignored.
        screen.input.set_value("b");
        let (next_seq, _) = screen.submit().unwrap();
        assert!(!screen.confidence_revealed);
        screen.reveal_confidence(seq);
        assert!(!screen.confidence_revealed);

        screen.apply_result(next_seq, Ok(payload(Category::Neutral, 0.7)));
        screen.reveal_confidence(next_seq);
        assert!(screen.confidence_revealed);
    }

    #[test]
    fn test_reset_on_leave_discards_everything() {
        let mut screen = FactCheckScreen::new();
        screen.input.set_value("claim");
        let (seq, _) = screen.submit().unwrap();
        screen.reset_on_leave();

        assert_eq!(screen.request, RequestState::Idle);
        assert!(!screen.apply_result(seq, Ok(payload(Category::Entailment, 1.0))));
        assert!(screen.history.is_empty());
        assert_eq!(screen.input.value(), "");
    }
}
