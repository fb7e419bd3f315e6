//! Tri-state request machine with supersede semantics.
//!
//! Each screen owns exactly one [`RequestState`]; it is replaced wholesale
//! on every transition, never partially mutated. Every submit allocates a
//! sequence number, and a resolution is applied only when its sequence
//! matches the current pending one, so the visible state always reflects
//! the most recent request.

/// State of the single visible request for a screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState<T> {
    /// No request has been made yet (or the screen was reset).
    #[default]
    Idle,
    /// A request with this sequence number is outstanding.
    Pending { seq: u64 },
    /// The latest request resolved successfully.
    Succeeded(T),
    /// The latest request failed; the message is user-readable.
    Failed(String),
}

impl<T> RequestState<T> {
    /// True while a request is outstanding.
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending { .. })
    }

    /// The successful payload, if any.
    pub fn success(&self) -> Option<&T> {
        match self {
            RequestState::Succeeded(payload) => Some(payload),
            _ => None,
        }
    }

    /// The failure message, if any.
    pub fn failure(&self) -> Option<&str> {
        match self {
            RequestState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Transition to Pending for the given sequence number.
    pub fn begin(&mut self, seq: u64) {
        *self = RequestState::Pending { seq };
    }

    /// Transition to Failed without a network call (validation).
    pub fn reject(&mut self, message: impl Into<String>) {
        *self = RequestState::Failed(message.into());
    }

    /// Apply a resolution for sequence `seq`.
    ///
    /// Returns true and transitions to Succeeded/Failed only when `seq`
    /// matches the currently pending sequence; any stale or unexpected
    /// resolution is discarded.
    pub fn resolve(&mut self, seq: u64, result: Result<T, String>) -> bool {
        match self {
            RequestState::Pending { seq: pending } if *pending == seq => {
                *self = match result {
                    Ok(payload) => RequestState::Succeeded(payload),
                    Err(message) => RequestState::Failed(message),
                };
                true
            }
            _ => false,
        }
    }

    /// Reset to Idle, discarding any pending request's future effect.
    pub fn reset(&mut self) {
        *self = RequestState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state: RequestState<u32> = RequestState::default();
        assert_eq!(state, RequestState::Idle);
        assert!(!state.is_pending());
    }

    #[test]
    fn test_begin_and_resolve_success() {
        let mut state: RequestState<u32> = RequestState::Idle;
        state.begin(1);
        assert!(state.is_pending());

        assert!(state.resolve(1, Ok(42)));
        assert_eq!(state.success(), Some(&42));
    }

    #[test]
    fn test_resolve_failure() {
        let mut state: RequestState<u32> = RequestState::Idle;
        state.begin(1);
        assert!(state.resolve(1, Err("server down".to_string())));
        assert_eq!(state.failure(), Some("server down"));
    }

    #[test]
    fn test_stale_resolution_is_discarded() {
        let mut state: RequestState<u32> = RequestState::Idle;
        state.begin(1);
        state.begin(2); // supersedes seq 1

        // The older request resolves first and must be ignored.
        assert!(!state.resolve(1, Ok(111)));
        assert!(state.is_pending());

        assert!(state.resolve(2, Ok(222)));
        assert_eq!(state.success(), Some(&222));
    }

    #[test]
    fn test_stale_resolution_after_completion_is_discarded() {
        let mut state: RequestState<u32> = RequestState::Idle;
        state.begin(1);
        state.begin(2);
        assert!(state.resolve(2, Ok(222)));

        // Old request finally fails; visible state must not change.
        assert!(!state.resolve(1, Err("late failure".to_string())));
        assert_eq!(state.success(), Some(&222));
    }

    #[test]
    fn test_resolution_after_reset_is_discarded() {
        let mut state: RequestState<u32> = RequestState::Idle;
        state.begin(7);
        state.reset();
        assert!(!state.resolve(7, Ok(1)));
        assert_eq!(state, RequestState::Idle);
    }

    #[test]
    fn test_reject_sets_failed_without_pending() {
        let mut state: RequestState<u32> = RequestState::Idle;
        state.reject("Please enter some text.");
        assert_eq!(state.failure(), Some("Please enter some text."));
    }

    #[test]
    fn test_resubmit_after_failure() {
        let mut state: RequestState<u32> = RequestState::Idle;
        state.begin(1);
        state.resolve(1, Err("oops".to_string()));
        state.begin(2);
        assert!(state.is_pending());
        assert!(state.resolve(2, Ok(9)));
    }
}
