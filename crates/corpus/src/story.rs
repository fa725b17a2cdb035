use crate::error::{CorpusError, Result};
use crate::hash::hash_hex;
use crate::record::{ArticleRecord, SummaryRecord};
use once_cell::sync::Lazy;
use rcsum_text::{contains_sublist, join_tokens, normalized_tokens, Tokenizer};
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

/// Separates the article body from its highlight bullets
pub const HIGHLIGHT_MARKER: &str = "@highlight";

/// Extension of story files (`<sha1-of-url>.story`)
pub const STORY_EXTENSION: &str = "story";

static HIGHLIGHT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@highlight\n\n(.*)").expect("static regex"));

/// What happened to one (url, query) extraction attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// Summaries were recorded for the query
    Recorded,

    /// The article already had summaries for this query
    AlreadyPresent,

    /// The story has highlights but no article text
    HighlightOnly,

    /// No highlight contains the query tokens
    NoMatchingHighlight,
}

/// Locates story files by url hash and derives summaries for a query
pub struct StoryExtractor<T> {
    tokenizer: T,
    stories_dir: PathBuf,
}

impl<T: Tokenizer> StoryExtractor<T> {
    pub fn new(tokenizer: T, stories_dir: impl AsRef<Path>) -> Self {
        Self {
            tokenizer,
            stories_dir: stories_dir.as_ref().to_path_buf(),
        }
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    /// `<stories_dir>/<sha1(url)>.story`
    pub fn story_path(&self, url: &str) -> PathBuf {
        self.stories_dir
            .join(format!("{}.{STORY_EXTENSION}", hash_hex(url)))
    }

    /// Read the story for `url` and record summaries for `query` into `article`.
    pub fn extract(
        &self,
        query: &[String],
        article: &mut ArticleRecord,
        url: &str,
    ) -> Result<ExtractionOutcome> {
        if article.has_query(&join_tokens(query)) {
            return Ok(ExtractionOutcome::AlreadyPresent);
        }
        let story = self.read_story(url)?;
        Ok(self.extract_from_story(query, article, &story))
    }

    fn read_story(&self, url: &str) -> Result<String> {
        let path = self.story_path(url);
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(text.replace("\r\n", "\n")),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(CorpusError::StoryNotFound {
                    url: url.to_string(),
                    path,
                })
            }
            Err(err) => Err(CorpusError::io(path, err)),
        }
    }

    /// Same as [`Self::extract`] with the story text already loaded.
    pub fn extract_from_story(
        &self,
        query: &[String],
        article: &mut ArticleRecord,
        story: &str,
    ) -> ExtractionOutcome {
        let query_key = join_tokens(query);
        if article.has_query(&query_key) {
            return ExtractionOutcome::AlreadyPresent;
        }

        let (body, highlight_block) = split_story(story);
        if body.is_empty() {
            return ExtractionOutcome::HighlightOnly;
        }

        // Exact token match only: "american" does not match "asian-american".
        let matching: Vec<Vec<String>> = HIGHLIGHT_LINE
            .captures_iter(highlight_block)
            .filter_map(|caps| caps.get(1))
            .map(|highlight| normalized_tokens(&self.tokenizer, highlight.as_str()))
            .filter(|tokens| contains_sublist(tokens, query))
            .collect();
        let Some(first_highlight) = matching.first() else {
            return ExtractionOutcome::NoMatchingHighlight;
        };

        let sentence = self.first_query_sentence(query, body);
        let synthetic = synthetic_summary(&sentence, first_highlight);

        let summary = SummaryRecord {
            first_query_sentence: join_tokens(&sentence),
            reference_summaries: matching
                .iter()
                .map(|tokens| join_tokens(tokens))
                .collect::<BTreeSet<_>>(),
            synthetic_summary: join_tokens(&synthetic),
        };

        article.set_article_tokens_once(normalized_tokens(&self.tokenizer, body));
        article.insert_summary(query_key, summary);
        ExtractionOutcome::Recorded
    }

    /// Tokens of the first sentence that contains `query`, or of the article's first sentence.
    ///
    /// A trailing `.` token is dropped so the sentence lines up with highlights, which rarely
    /// end with a period.
    pub fn first_query_sentence(&self, query: &[String], body: &str) -> Vec<String> {
        let mut first_sentence: Option<Vec<String>> = None;
        let mut query_sentence: Option<Vec<String>> = None;

        'paragraphs: for paragraph in body.lines() {
            for sentence in self.tokenizer.segment_sentences(paragraph) {
                let tokens = normalized_tokens(&self.tokenizer, &sentence);
                if contains_sublist(&tokens, query) {
                    query_sentence = Some(tokens);
                    break 'paragraphs;
                }
                if first_sentence.is_none() {
                    first_sentence = Some(tokens);
                }
            }
        }

        let mut tokens = query_sentence.or(first_sentence).unwrap_or_default();
        if tokens.last().is_some_and(|last| last == ".") {
            tokens.pop();
        }
        tokens
    }
}

/// Split at the first highlight marker into (trimmed body, trimmed highlight block).
///
/// Without a marker the whole story is body and there are no highlights.
pub fn split_story(story: &str) -> (&str, &str) {
    match story.find(HIGHLIGHT_MARKER) {
        Some(idx) => (story[..idx].trim(), story[idx..].trim()),
        None => (story.trim(), ""),
    }
}

/// Tokens of `sentence` that occur anywhere in `highlight`, in sentence order.
pub fn synthetic_summary(sentence: &[String], highlight: &[String]) -> Vec<String> {
    let vocabulary: HashSet<&str> = highlight.iter().map(String::as_str).collect();
    sentence
        .iter()
        .filter(|token| vocabulary.contains(token.as_str()))
        .cloned()
        .collect()
}
