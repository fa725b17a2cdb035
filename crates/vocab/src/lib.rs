//! # rcsum Vocab
//!
//! Token frequency tables over a converted dataset split: one for `documents/`, one for
//! `references/`, and their merge. Files are whitespace-split, so counts follow the
//! tokenization the dataset was written with.

mod builder;
mod error;
mod vocabulary;

pub use builder::{count_directory, write_vocabulary, Vocabularies, DOCUMENTS_DIR, REFERENCES_DIR};
pub use error::{Result, VocabError};
pub use vocabulary::Vocabulary;
