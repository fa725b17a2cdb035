use crate::error::{CorpusError, Result};
use crate::question::QUESTION_SUFFIX;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Scanner for question files under a corpus root
pub struct QuestionScanner {
    root: PathBuf,
}

impl QuestionScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// All `*.question` files below the root at any depth, sorted by path.
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root).follow_links(true) {
            let entry = entry.map_err(|err| {
                let path = err
                    .path()
                    .map_or_else(|| self.root.clone(), Path::to_path_buf);
                CorpusError::io(path, err.into())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if Self::is_question_file(entry.path()) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        log::info!("Found {} question files", files.len());
        Ok(files)
    }

    fn is_question_file(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(QUESTION_SUFFIX))
    }
}
