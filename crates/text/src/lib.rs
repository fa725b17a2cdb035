//! # rcsum Text
//!
//! Tokenization boundary for the corpus pipeline.
//!
//! ## Pipeline
//!
//! ```text
//! Raw text
//!     │
//!     ├──> Sentence segmentation (UAX #29 + abbreviation merge)
//!     │
//!     ├──> Treebank word rules (per sentence)
//!     │
//!     └──> Normalization (lowercase + leading-apostrophe split)
//! ```
//!
//! Backends implement [`Tokenizer`]; the corpus crate only ever sees the trait, so a
//! different segmenter can be dropped in without touching extraction.
//!
//! ## Example
//!
//! ```rust
//! use rcsum_text::{contains_sublist, normalized_tokens, TreebankTokenizer};
//!
//! let tokenizer = TreebankTokenizer::new();
//! let tokens = normalized_tokens(&tokenizer, "The cat sat.");
//! assert_eq!(tokens, vec!["the", "cat", "sat", "."]);
//! assert!(contains_sublist(&tokens, &["cat".to_string()]));
//! ```

mod normalize;
mod segment;
mod sublist;
mod treebank;

pub use normalize::{normalize_token, APOSTROPHE_WORDS};
pub use sublist::{contains_sublist, join_tokens};
pub use treebank::TreebankTokenizer;

/// Word and sentence segmentation backend.
pub trait Tokenizer {
    /// Split text into word/punctuation tokens, in order.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Split a single paragraph into sentences, in order.
    fn segment_sentences(&self, paragraph: &str) -> Vec<String>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokenize(&self, text: &str) -> Vec<String> {
        (**self).tokenize(text)
    }

    fn segment_sentences(&self, paragraph: &str) -> Vec<String> {
        (**self).segment_sentences(paragraph)
    }
}

/// Tokenize with the backend, then normalize every token.
pub fn normalized_tokens<T: Tokenizer + ?Sized>(tokenizer: &T, text: &str) -> Vec<String> {
    tokenizer
        .tokenize(text)
        .iter()
        .map(|token| normalize_token(token))
        .collect()
}
