//! Bounded most-recent-first history of fact-check results.

use chrono::{DateTime, Utc};

use crate::models::Category;

/// Maximum number of entries kept in the buffer.
pub const HISTORY_CAPACITY: usize = 5;

/// One past successful fact-check result.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// The text that was submitted.
    pub input_text: String,
    /// The category the model returned.
    pub category: Category,
    /// Model confidence in [0, 1].
    pub confidence: f64,
    /// When the result was recorded.
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time.
    pub fn new(input_text: impl Into<String>, category: Category, confidence: f64) -> Self {
        Self {
            input_text: input_text.into(),
            category,
            confidence,
            recorded_at: Utc::now(),
        }
    }
}

/// Most-recent-first list of the last [`HISTORY_CAPACITY`] results.
///
/// No dedup: identical repeated inputs produce separate entries. Lifetime
/// is bound to the screen's mounted session; [`HistoryBuffer::clear`] runs
/// when the screen is left.
#[derive(Debug, Clone, Default)]
pub struct HistoryBuffer {
    entries: Vec<HistoryEntry>,
}

impl HistoryBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an entry, evicting the oldest past capacity.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str) -> HistoryEntry {
        HistoryEntry::new(text, Category::Neutral, 0.5)
    }

    #[test]
    fn test_record_prepends() {
        let mut buffer = HistoryBuffer::new();
        buffer.record(entry("first"));
        buffer.record(entry("second"));
        assert_eq!(buffer.entries()[0].input_text, "second");
        assert_eq!(buffer.entries()[1].input_text, "first");
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut buffer = HistoryBuffer::new();
        for i in 0..8 {
            buffer.record(entry(&format!("submission {}", i)));
        }
        assert_eq!(buffer.len(), HISTORY_CAPACITY);

        // The last 5 in reverse-chronological order.
        let texts: Vec<&str> = buffer
            .entries()
            .iter()
            .map(|e| e.input_text.as_str())
            .collect();
        assert_eq!(
            texts,
            vec![
                "submission 7",
                "submission 6",
                "submission 5",
                "submission 4",
                "submission 3"
            ]
        );
    }

    #[test]
    fn test_no_dedup() {
        let mut buffer = HistoryBuffer::new();
        buffer.record(entry("same"));
        buffer.record(entry("same"));
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut buffer = HistoryBuffer::new();
        buffer.record(entry("x"));
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
