use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for ROUGE operations
pub type Result<T> = std::result::Result<T, RougeError>;

/// Errors that can occur while preparing or running ROUGE
#[derive(Error, Debug)]
pub enum RougeError {
    /// IO error occurred
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// ROUGE-1.5.5.pl is not where the rouge dir says it is
    #[error("ROUGE script not found at {}", .0.display())]
    ScriptNotFound(PathBuf),

    /// A system summary has no reference summaries
    #[error("No reference summaries match system summary {0}")]
    MissingReferences(String),

    /// Filename pattern is not a valid regex
    #[error("Invalid filename pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The evaluator exited unsuccessfully
    #[error("ROUGE exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },
}

impl RougeError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
