use rcsum_text::join_tokens;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Per-url state accumulated across every question file that cites the article
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleRecord {
    /// Tokenized article body (set by the first successful extraction)
    pub article_tokens: Vec<String>,

    /// Newline-joined tokenized entity names, from the first question file seen
    pub entities: String,

    /// Joined query tokens -> summaries for that query
    pub query_to_summaries: HashMap<String, SummaryRecord>,
}

impl ArticleRecord {
    #[must_use]
    pub fn new(entities: String) -> Self {
        Self {
            entities,
            ..Default::default()
        }
    }

    pub fn has_query(&self, query_key: &str) -> bool {
        self.query_to_summaries.contains_key(query_key)
    }

    pub fn has_summaries(&self) -> bool {
        !self.query_to_summaries.is_empty()
    }

    /// Store the article body unless one is already present.
    pub fn set_article_tokens_once(&mut self, tokens: Vec<String>) {
        if self.article_tokens.is_empty() {
            self.article_tokens = tokens;
        }
    }

    /// Insert summaries for a query. Returns `false` if the query was already recorded.
    pub fn insert_summary(&mut self, query_key: String, summary: SummaryRecord) -> bool {
        if self.has_query(&query_key) {
            return false;
        }
        self.query_to_summaries.insert(query_key, summary);
        true
    }

    /// Article body as written to `documents/<id>.txt`
    #[must_use]
    pub fn article_text(&self) -> String {
        join_tokens(&self.article_tokens)
    }

    /// Whitespace-delimited length of [`Self::article_text`]
    #[must_use]
    pub fn article_length(&self) -> usize {
        self.article_text().split_whitespace().count()
    }
}

/// Summaries derived for one (document, query) pair
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryRecord {
    /// First article sentence containing the query (trailing period dropped)
    pub first_query_sentence: String,

    /// Every highlight containing the query; never empty
    pub reference_summaries: BTreeSet<String>,

    /// Query sentence tokens that also occur in the first matching highlight
    pub synthetic_summary: String,
}
