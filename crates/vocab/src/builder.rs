use crate::error::{Result, VocabError};
use crate::vocabulary::Vocabulary;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Subdirectory holding article texts
pub const DOCUMENTS_DIR: &str = "documents";

/// Subdirectory holding reference summaries
pub const REFERENCES_DIR: &str = "references";

/// Vocabularies over documents, references, and both
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabularies {
    pub document: Vocabulary,
    pub summary: Vocabulary,
    pub full: Vocabulary,
}

impl Vocabularies {
    /// Count `<input_dir>/documents` and `<input_dir>/references`.
    pub fn extract(input_dir: &Path) -> Result<Self> {
        let document = count_directory(&input_dir.join(DOCUMENTS_DIR))?;
        let summary = count_directory(&input_dir.join(REFERENCES_DIR))?;
        let full = document.merge(&summary);
        Ok(Self {
            document,
            summary,
            full,
        })
    }

    /// Output file name and vocabulary, in write order
    pub fn named(&self) -> [(&'static str, &Vocabulary); 3] {
        [
            ("document_vocabulary.txt", &self.document),
            ("summary_vocabulary.txt", &self.summary),
            ("full_vocabulary.txt", &self.full),
        ]
    }

    /// Write the three vocabulary files into `output_dir`, creating it if needed.
    pub fn write(&self, output_dir: &Path) -> Result<()> {
        fs::create_dir_all(output_dir).map_err(|err| VocabError::io(output_dir, err))?;
        for (name, vocabulary) in self.named() {
            write_vocabulary(&output_dir.join(name), vocabulary)?;
        }
        Ok(())
    }
}

/// Whitespace-split every regular file directly inside `dir` into one vocabulary.
pub fn count_directory(dir: &Path) -> Result<Vocabulary> {
    let mut vocabulary = Vocabulary::new();
    let mut files = 0usize;

    let entries = fs::read_dir(dir).map_err(|err| VocabError::io(dir, err))?;
    for entry in entries {
        let path = entry.map_err(|err| VocabError::io(dir, err))?.path();
        if !path.is_file() {
            continue;
        }
        let text = fs::read_to_string(&path).map_err(|err| VocabError::io(&path, err))?;
        vocabulary.expand(text.split_whitespace());
        files += 1;
    }

    log::debug!(
        "Counted {} distinct tokens in {} files under {}",
        vocabulary.len(),
        files,
        dir.display()
    );
    Ok(vocabulary)
}

/// One `"<token> <count>"` line per entry, sorted.
pub fn write_vocabulary(path: &Path, vocabulary: &Vocabulary) -> Result<()> {
    let mut contents = String::new();
    for (token, count) in vocabulary.sorted() {
        let _ = writeln!(contents, "{token} {count}");
    }
    fs::write(path, contents).map_err(|err| VocabError::io(path, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn dataset(root: &Path) {
        let documents = root.join(DOCUMENTS_DIR);
        let references = root.join(REFERENCES_DIR);
        fs::create_dir_all(documents.join("nested")).unwrap();
        fs::create_dir_all(&references).unwrap();
        fs::write(documents.join("1.txt"), "the cat sat .\nthe dog ran .").unwrap();
        fs::write(documents.join("2.txt"), "a dog").unwrap();
        fs::write(documents.join("nested").join("skip.txt"), "ignored ignored").unwrap();
        fs::write(references.join("A.1.1.txt"), "cat sat").unwrap();
        fs::write(references.join("A.2.1.txt"), "dog").unwrap();
    }

    #[test]
    fn builds_three_vocabularies() {
        let temp = tempdir().unwrap();
        dataset(temp.path());

        let vocabularies = Vocabularies::extract(temp.path()).unwrap();
        assert_eq!(vocabularies.document.count("the"), 2);
        assert_eq!(vocabularies.document.count("ignored"), 0);
        assert_eq!(vocabularies.summary.count("dog"), 1);
        assert_eq!(vocabularies.full.count("dog"), 3);
        assert_eq!(vocabularies.full.count("cat"), 2);
    }

    #[test]
    fn writes_sorted_vocabulary_files() {
        let temp = tempdir().unwrap();
        dataset(temp.path());
        let out = temp.path().join("vocab");

        Vocabularies::extract(temp.path())
            .unwrap()
            .write(&out)
            .unwrap();

        assert_eq!(
            fs::read_to_string(out.join("summary_vocabulary.txt")).unwrap(),
            "cat 1\ndog 1\nsat 1\n"
        );
        assert_eq!(
            fs::read_to_string(out.join("full_vocabulary.txt")).unwrap(),
            "dog 3\n. 2\ncat 2\nsat 2\nthe 2\na 1\nran 1\n"
        );
        assert!(out.join("document_vocabulary.txt").exists());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp = tempdir().unwrap();
        assert!(Vocabularies::extract(temp.path()).is_err());
    }
}
