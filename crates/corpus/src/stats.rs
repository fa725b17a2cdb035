use crate::story::ExtractionOutcome;
use serde::{Deserialize, Serialize};

/// Counters for one extraction pass over the question files
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Question files parsed
    pub question_files: usize,

    /// Story extractions attempted (question files minus duplicate pairs)
    pub extractions: usize,

    /// Question files whose (url, query) pair was already summarized
    pub duplicate_pairs: usize,

    /// Stories with highlights but no article text
    pub highlight_only: usize,

    /// (url, query) pairs with no highlight containing the query
    pub no_matching_highlight: usize,

    /// (url, query) pairs with recorded summaries
    pub summaries: usize,

    /// Distinct urls seen
    pub articles: usize,
}

impl ExtractionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_outcome(&mut self, outcome: ExtractionOutcome) {
        match outcome {
            ExtractionOutcome::Recorded => self.summaries += 1,
            ExtractionOutcome::AlreadyPresent => self.duplicate_pairs += 1,
            ExtractionOutcome::HighlightOnly => self.highlight_only += 1,
            ExtractionOutcome::NoMatchingHighlight => self.no_matching_highlight += 1,
        }
    }
}

/// Files written for one split
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SplitStats {
    pub documents: usize,
    pub queries: usize,
    pub references: usize,
}

/// Files written per split
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WriteStats {
    pub validation: SplitStats,
    pub test: SplitStats,
    pub training: SplitStats,
}

impl WriteStats {
    pub fn total_references(&self) -> usize {
        self.validation.references + self.test.references + self.training.references
    }
}
