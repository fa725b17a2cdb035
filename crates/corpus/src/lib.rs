//! # rcsum Corpus
//!
//! Turns a cloze-question news corpus into a query-focused summarization dataset.
//!
//! ## Pipeline
//!
//! ```text
//! questions/**/*.question
//!     │
//!     ├──> Question parser
//!     │      └─> (url, query tokens, entity list)
//!     │
//!     ├──> Story extractor (stories/<sha1(url)>.story)
//!     │      ├─> article body + highlights
//!     │      ├─> highlights containing the query  → references
//!     │      ├─> first sentence containing query  → first query sentence
//!     │      └─> sentence ∩ first reference        → synthetic summary
//!     │
//!     ├──> Aggregator (url → ArticleRecord)
//!     │
//!     └──> Partition by sha1(url) + write
//!            └─> {validation,test,training}/{documents,entities,queries,references}
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use rcsum_corpus::{partition, ConvertConfig, CorpusBuilder, DatasetWriter};
//! use rcsum_text::TreebankTokenizer;
//! use std::path::Path;
//!
//! fn main() -> rcsum_corpus::Result<()> {
//!     let corpus = CorpusBuilder::new(TreebankTokenizer::new(), "cnn/stories")
//!         .build("cnn/questions")?;
//!
//!     let config = ConvertConfig::default();
//!     let splits = partition(corpus.articles, config.validation_test_fraction);
//!     let stats = DatasetWriter::new(config)?.write(&splits, Path::new("out"))?;
//!
//!     println!("Wrote {} reference summaries", stats.total_references());
//!     Ok(())
//! }
//! ```

mod aggregator;
mod config;
mod error;
mod hash;
mod query_offset;
mod question;
mod record;
mod scanner;
mod split;
mod stats;
mod story;
mod writer;

pub use aggregator::{ArticleLookup, Corpus, CorpusBuilder};
pub use config::ConvertConfig;
pub use error::{CorpusError, Result};
pub use hash::hash_hex;
pub use query_offset::{offset_query_files, offset_query_id, OffsetSummary, DEFAULT_OFFSET_DIR};
pub use question::{parse_question, QuestionRecord, QUESTION_SUFFIX};
pub use record::{ArticleRecord, SummaryRecord};
pub use scanner::QuestionScanner;
pub use split::{partition, validation_test_size, DatasetSplits, SplitKind};
pub use stats::{ExtractionStats, SplitStats, WriteStats};
pub use story::{
    split_story, synthetic_summary, ExtractionOutcome, StoryExtractor, HIGHLIGHT_MARKER,
    STORY_EXTENSION,
};
pub use writer::{
    DatasetWriter, DOCUMENTS_DIR, ENTITIES_DIR, FIRST_QUERY_SENTENCES_DIR, INPUT_LENGTHS_FILE,
    QUERIES_DIR, REFERENCES_DIR, SYNTHETIC_REFERENCES_DIR,
};
