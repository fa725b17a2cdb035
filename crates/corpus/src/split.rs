use crate::aggregator::ArticleLookup;
use crate::hash::hash_hex;
use crate::record::ArticleRecord;

/// The three output partitions, in write order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitKind {
    Validation,
    Test,
    Training,
}

impl SplitKind {
    pub const ALL: [SplitKind; 3] = [Self::Validation, Self::Test, Self::Training];

    /// Directory name under the output root
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Test => "test",
            Self::Training => "training",
        }
    }
}

/// Articles with summaries, assigned to splits in hash order
#[derive(Debug, Default)]
pub struct DatasetSplits {
    pub validation: Vec<(String, ArticleRecord)>,
    pub test: Vec<(String, ArticleRecord)>,
    pub training: Vec<(String, ArticleRecord)>,
}

impl DatasetSplits {
    pub fn get(&self, kind: SplitKind) -> &[(String, ArticleRecord)] {
        match kind {
            SplitKind::Validation => &self.validation,
            SplitKind::Test => &self.test,
            SplitKind::Training => &self.training,
        }
    }

    pub fn total(&self) -> usize {
        self.validation.len() + self.test.len() + self.training.len()
    }
}

/// `ceil(fraction * total)`: size of each of validation and test.
pub fn validation_test_size(fraction: f64, total: usize) -> usize {
    (fraction * total as f64).ceil() as usize
}

/// Drop articles without summaries, order the rest by url hash, then cut validation and
/// test off the front.
///
/// Hash order is independent of directory iteration order, so the same input always gives
/// the same splits. When `2k` exceeds the article count the test split is simply short.
pub fn partition(articles: ArticleLookup, fraction: f64) -> DatasetSplits {
    let mut ordered: Vec<(String, String, ArticleRecord)> = articles
        .into_iter()
        .filter(|(_, record)| record.has_summaries())
        .map(|(url, record)| (hash_hex(&url), url, record))
        .collect();
    ordered.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));

    let k = validation_test_size(fraction, ordered.len());
    let mut rest: Vec<(String, ArticleRecord)> = ordered
        .into_iter()
        .map(|(_, url, record)| (url, record))
        .collect();

    let validation_end = k.min(rest.len());
    let training = rest.split_off((2 * k).min(rest.len()));
    let test = rest.split_off(validation_end);
    let validation = rest;

    log::info!(
        "Split {} articles: {} validation, {} test, {} training",
        validation.len() + test.len() + training.len(),
        validation.len(),
        test.len(),
        training.len()
    );

    DatasetSplits {
        validation,
        test,
        training,
    }
}
