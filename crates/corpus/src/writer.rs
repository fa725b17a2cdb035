use crate::config::ConvertConfig;
use crate::error::{CorpusError, Result};
use crate::hash::hash_hex;
use crate::record::{ArticleRecord, SummaryRecord};
use crate::split::{DatasetSplits, SplitKind};
use crate::stats::{SplitStats, WriteStats};
use std::fs;
use std::path::{Path, PathBuf};

pub const QUERIES_DIR: &str = "queries";
pub const DOCUMENTS_DIR: &str = "documents";
pub const REFERENCES_DIR: &str = "references";
pub const ENTITIES_DIR: &str = "entities";
pub const FIRST_QUERY_SENTENCES_DIR: &str = "first_query_sentences";
pub const SYNTHETIC_REFERENCES_DIR: &str = "synthetic_references";
pub const INPUT_LENGTHS_FILE: &str = "input_lengths.txt";

const PROGRESS_INTERVAL: usize = 1000;

/// Letter naming the `idx`-th reference of a query: `A`, `B`, `C`, ...
fn reference_letter(idx: usize) -> char {
    u32::try_from(idx)
        .ok()
        .and_then(|offset| char::from_u32(u32::from(b'A') + offset))
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|err| CorpusError::io(path, err))
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|err| CorpusError::io(path, err))
}

/// Subdirectories of one split directory
struct SplitDirs {
    root: PathBuf,
    queries: PathBuf,
    documents: PathBuf,
    references: PathBuf,
    entities: PathBuf,
    first_query_sentences: Option<PathBuf>,
    synthetic_references: Option<PathBuf>,
}

impl SplitDirs {
    fn create(root: PathBuf, config: &ConvertConfig) -> Result<Self> {
        let dirs = Self {
            queries: root.join(QUERIES_DIR),
            documents: root.join(DOCUMENTS_DIR),
            references: root.join(REFERENCES_DIR),
            entities: root.join(ENTITIES_DIR),
            first_query_sentences: config
                .save_first_query_sentences
                .then(|| root.join(FIRST_QUERY_SENTENCES_DIR)),
            synthetic_references: config
                .save_synthetic_references
                .then(|| root.join(SYNTHETIC_REFERENCES_DIR)),
            root,
        };

        for dir in [&dirs.queries, &dirs.documents, &dirs.references, &dirs.entities] {
            create_dir(dir)?;
        }
        for dir in [&dirs.first_query_sentences, &dirs.synthetic_references]
            .into_iter()
            .flatten()
        {
            create_dir(dir)?;
        }
        Ok(dirs)
    }
}

/// Writes the split dataset in the `<split>/<kind>/<doc>.<query>.txt` layout
pub struct DatasetWriter {
    config: ConvertConfig,
}

impl DatasetWriter {
    /// Create a writer; rejects an out-of-range validation/test fraction.
    pub fn new(config: ConvertConfig) -> Result<Self> {
        config.validate().map_err(CorpusError::invalid_config)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Wipe `output_dir` and write every split into it.
    pub fn write(&self, splits: &DatasetSplits, output_dir: &Path) -> Result<WriteStats> {
        match fs::remove_dir_all(output_dir) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(CorpusError::io(output_dir, err)),
        }

        let mut stats = WriteStats::default();
        let mut total_references = 0;
        for kind in SplitKind::ALL {
            let dirs = SplitDirs::create(output_dir.join(kind.dir_name()), &self.config)?;
            let split_stats = self.write_split(&dirs, splits.get(kind), &mut total_references)?;
            log::debug!("{}: {:?}", kind.dir_name(), split_stats);
            match kind {
                SplitKind::Validation => stats.validation = split_stats,
                SplitKind::Test => stats.test = split_stats,
                SplitKind::Training => stats.training = split_stats,
            }
        }
        Ok(stats)
    }

    fn write_split(
        &self,
        dirs: &SplitDirs,
        articles: &[(String, ArticleRecord)],
        total_references: &mut usize,
    ) -> Result<SplitStats> {
        let mut stats = SplitStats::default();
        let mut input_lengths: Vec<String> = Vec::new();

        let with_summaries = articles.iter().filter(|(_, record)| record.has_summaries());
        for (document_id, (_, article)) in (1..).zip(with_summaries) {
            let document_file = format!("{document_id}.txt");
            write_file(&dirs.documents.join(&document_file), &article.article_text())?;
            write_file(&dirs.entities.join(&document_file), &article.entities)?;
            stats.documents += 1;

            let article_length = article.article_length();
            for (query_id, (query, summaries)) in (1..).zip(queries_in_hash_order(article)) {
                let query_file = format!("{document_id}.{query_id}.txt");
                write_file(&dirs.queries.join(&query_file), query)?;
                if let Some(dir) = &dirs.first_query_sentences {
                    write_file(&dir.join(&query_file), &summaries.first_query_sentence)?;
                }
                if let Some(dir) = &dirs.synthetic_references {
                    write_file(
                        &dir.join(format!("A.{query_file}")),
                        &summaries.synthetic_summary,
                    )?;
                }
                stats.queries += 1;

                for (reference_idx, reference) in
                    references_in_hash_order(summaries).into_iter().enumerate()
                {
                    let reference_file =
                        format!("{}.{query_file}", reference_letter(reference_idx));
                    write_file(&dirs.references.join(&reference_file), reference)?;
                    input_lengths.push(format!("{reference_file} {article_length}"));

                    stats.references += 1;
                    *total_references += 1;
                    if *total_references % PROGRESS_INTERVAL == 0 {
                        log::info!("{} items processed...", total_references);
                    }
                }
            }
        }

        if self.config.save_document_lengths {
            let mut contents = String::new();
            for line in &input_lengths {
                contents.push_str(line);
                contents.push('\n');
            }
            write_file(&dirs.root.join(INPUT_LENGTHS_FILE), &contents)?;
        }
        Ok(stats)
    }
}

fn queries_in_hash_order(article: &ArticleRecord) -> Vec<(&String, &SummaryRecord)> {
    let mut queries: Vec<(&String, &SummaryRecord)> = article.query_to_summaries.iter().collect();
    queries.sort_by_cached_key(|(query, _)| (hash_hex(query), (*query).clone()));
    queries
}

fn references_in_hash_order(summaries: &SummaryRecord) -> Vec<&String> {
    let mut references: Vec<&String> = summaries.reference_summaries.iter().collect();
    references.sort_by_cached_key(|reference| (hash_hex(reference), (*reference).clone()));
    references
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::partition;
    use crate::ArticleLookup;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;
    use tempfile::tempdir;

    fn summary(sentence: &str, references: &[&str], synthetic: &str) -> SummaryRecord {
        SummaryRecord {
            first_query_sentence: sentence.to_string(),
            reference_summaries: references.iter().map(|r| r.to_string()).collect(),
            synthetic_summary: synthetic.to_string(),
        }
    }

    fn article(body: &str, queries: &[(&str, SummaryRecord)]) -> ArticleRecord {
        let mut record = ArticleRecord::new("cnn\nobama".to_string());
        record.set_article_tokens_once(body.split_whitespace().map(str::to_string).collect());
        for (query, summaries) in queries {
            record.insert_summary(query.to_string(), summaries.clone());
        }
        record
    }

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    fn list(dir: &Path) -> BTreeSet<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }

    fn single_article_splits() -> DatasetSplits {
        let mut lookup = ArticleLookup::new();
        lookup.insert(
            "http://example.com/a".to_string(),
            article(
                "obama spoke in paris .",
                &[
                    (
                        "obama",
                        summary(
                            "obama spoke in paris",
                            &["obama visits paris", "obama gives speech"],
                            "obama paris",
                        ),
                    ),
                    ("paris", summary("obama spoke in paris", &["paris hosts obama"], "paris")),
                ],
            ),
        );
        partition(lookup, 0.4)
    }

    #[test]
    fn writes_canonical_layout() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("out");
        let config = ConvertConfig {
            validation_test_fraction: 0.4,
            save_first_query_sentences: true,
            save_document_lengths: true,
            save_synthetic_references: true,
        };
        let stats = DatasetWriter::new(config)
            .unwrap()
            .write(&single_article_splits(), &out)
            .unwrap();

        assert_eq!(stats.validation.documents, 1);
        assert_eq!(stats.validation.queries, 2);
        assert_eq!(stats.validation.references, 3);
        assert_eq!(stats.total_references(), 3);

        let split = out.join("validation");
        assert_eq!(read(&split.join("documents/1.txt")), "obama spoke in paris .");
        assert_eq!(read(&split.join("entities/1.txt")), "cnn\nobama");

        // Query ids follow the hash of the query text.
        let (first, second) = if hash_hex("obama") < hash_hex("paris") {
            ("obama", "paris")
        } else {
            ("paris", "obama")
        };
        assert_eq!(read(&split.join("queries/1.1.txt")), first);
        assert_eq!(read(&split.join("queries/1.2.txt")), second);
        assert_eq!(
            read(&split.join("first_query_sentences/1.1.txt")),
            "obama spoke in paris"
        );

        let obama_id = if first == "obama" { 1 } else { 2 };
        let mut obama_refs = vec!["obama visits paris", "obama gives speech"];
        obama_refs.sort_by_key(|reference| hash_hex(reference));
        assert_eq!(
            read(&split.join(format!("references/A.1.{obama_id}.txt"))),
            obama_refs[0]
        );
        assert_eq!(
            read(&split.join(format!("references/B.1.{obama_id}.txt"))),
            obama_refs[1]
        );
        assert_eq!(
            read(&split.join(format!("synthetic_references/A.1.{obama_id}.txt"))),
            "obama paris"
        );

        let lengths = read(&split.join(INPUT_LENGTHS_FILE));
        let lines: Vec<&str> = lengths.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.ends_with(" 5")));
        assert!(lengths.ends_with('\n'));
    }

    #[test]
    fn empty_splits_still_get_directories() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("out");
        DatasetWriter::new(ConvertConfig::default())
            .unwrap()
            .write(&single_article_splits(), &out)
            .unwrap();

        for split in ["test", "training"] {
            assert_eq!(
                list(&out.join(split)),
                ["documents", "entities", "queries", "references"]
                    .into_iter()
                    .map(String::from)
                    .collect::<BTreeSet<_>>()
            );
            assert!(list(&out.join(split).join("documents")).is_empty());
        }
        assert!(!out.join("validation").join(INPUT_LENGTHS_FILE).exists());
    }

    #[test]
    fn output_directory_is_wiped_first() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("out");
        fs::create_dir_all(out.join("stale")).unwrap();
        fs::write(out.join("stale").join("old.txt"), "old").unwrap();

        DatasetWriter::new(ConvertConfig::default())
            .unwrap()
            .write(&DatasetSplits::default(), &out)
            .unwrap();
        assert!(!out.join("stale").exists());
        assert_eq!(
            list(&out),
            ["test", "training", "validation"]
                .into_iter()
                .map(String::from)
                .collect::<BTreeSet<_>>()
        );
    }

    #[test]
    fn writes_are_deterministic() {
        let temp = tempdir().unwrap();
        let writer = DatasetWriter::new(ConvertConfig::default()).unwrap();
        writer
            .write(&single_article_splits(), &temp.path().join("a"))
            .unwrap();
        writer
            .write(&single_article_splits(), &temp.path().join("b"))
            .unwrap();

        let refs_a = temp.path().join("a/validation/references");
        let refs_b = temp.path().join("b/validation/references");
        assert_eq!(list(&refs_a), list(&refs_b));
        for name in list(&refs_a) {
            assert_eq!(read(&refs_a.join(&name)), read(&refs_b.join(&name)));
        }
    }

    #[test]
    fn rejects_invalid_fraction() {
        let config = ConvertConfig {
            validation_test_fraction: 0.5,
            ..Default::default()
        };
        assert!(matches!(
            DatasetWriter::new(config),
            Err(CorpusError::InvalidConfig(_))
        ));
    }

    #[test]
    fn reference_letters_are_sequential() {
        assert_eq!(reference_letter(0), 'A');
        assert_eq!(reference_letter(1), 'B');
        assert_eq!(reference_letter(25), 'Z');
    }
}
