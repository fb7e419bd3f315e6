//! Display projection for subreddit sentiment payloads.

use crate::models::{Post, SentimentLabel, SentimentTotals};

/// One point of the chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelCount {
    /// The chartable label.
    pub label: SentimentLabel,
    /// Number of posts carrying it.
    pub count: usize,
}

/// Derived summary of a sentiment payload.
///
/// A pure function of the payload; see [`SentimentSummary::from_posts`]
/// and [`SentimentSummary::from_totals`].
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentSummary {
    /// Counts in the fixed order {Positive, Neutral, Negative}.
    counts: [LabelCount; 3],
    /// Posts whose label matched none of the three known ones.
    pub unclassified: usize,
    /// Total number of posts, unclassified included.
    pub total: usize,
}

impl SentimentSummary {
    /// Count posts per label.
    ///
    /// Labels missing from the payload count as zero; labels outside the
    /// three known ones land in the unclassified bucket.
    pub fn from_posts(posts: &[Post]) -> Self {
        let mut summary = Self::empty();
        for post in posts {
            summary.total += 1;
            match post.sentiment {
                SentimentLabel::Unclassified => summary.unclassified += 1,
                label => {
                    for slot in &mut summary.counts {
                        if slot.label == label {
                            slot.count += 1;
                        }
                    }
                }
            }
        }
        summary
    }

    /// Build a summary from the aggregated `/analyze` counts.
    pub fn from_totals(totals: &SentimentTotals) -> Self {
        let mut summary = Self::empty();
        for slot in &mut summary.counts {
            slot.count = totals.count(slot.label) as usize;
        }
        summary.total = totals.total() as usize;
        summary
    }

    fn empty() -> Self {
        Self {
            counts: SentimentLabel::CHART_ORDER.map(|label| LabelCount { label, count: 0 }),
            unclassified: 0,
            total: 0,
        }
    }

    /// True when the payload contained no posts at all.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Three-point series in the fixed order {Positive, Neutral, Negative}.
    pub fn series(&self) -> &[LabelCount; 3] {
        &self.counts
    }

    /// Count for one of the three chartable labels.
    pub fn count(&self, label: SentimentLabel) -> usize {
        self.counts
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.count)
            .unwrap_or(0)
    }

    /// The label with the highest count, or None for an empty payload.
    ///
    /// Ties break to the first label in the fixed enumeration order, so
    /// the result is deterministic.
    pub fn dominant(&self) -> Option<SentimentLabel> {
        if self.is_empty() {
            return None;
        }
        // Strictly-greater comparison keeps the first label on ties.
        let mut best: Option<&LabelCount> = None;
        for slot in &self.counts {
            match best {
                Some(current) if slot.count <= current.count => {}
                _ => best = Some(slot),
            }
        }
        best.map(|c| c.label)
    }

    /// Integer-rounded percentage of the dominant label, 0 when empty.
    pub fn dominant_percent(&self) -> u32 {
        match self.dominant() {
            Some(label) if self.total > 0 => {
                let count = self.count(label);
                ((count as f64 / self.total as f64) * 100.0).round() as u32
            }
            _ => 0,
        }
    }

    /// Equal-distribution baseline (total / 3) for the reference line.
    pub fn baseline(&self) -> f64 {
        self.total as f64 / 3.0
    }
}
