use crate::error::{CorpusError, Result};
use crate::question::parse_question;
use crate::record::ArticleRecord;
use crate::scanner::QuestionScanner;
use crate::stats::ExtractionStats;
use crate::story::StoryExtractor;
use rcsum_text::Tokenizer;
use std::collections::HashMap;
use std::path::Path;

/// Source url -> accumulated article state
pub type ArticleLookup = HashMap<String, ArticleRecord>;

const PROGRESS_INTERVAL: usize = 1000;

/// Result of walking the question files
#[derive(Debug, Default)]
pub struct Corpus {
    /// Every url seen, including those that ended up without summaries
    pub articles: ArticleLookup,
    pub stats: ExtractionStats,
}

/// Drives question parsing and story extraction over a questions directory
pub struct CorpusBuilder<T> {
    extractor: StoryExtractor<T>,
}

impl<T: Tokenizer> CorpusBuilder<T> {
    pub fn new(tokenizer: T, stories_dir: impl AsRef<Path>) -> Self {
        Self {
            extractor: StoryExtractor::new(tokenizer, stories_dir),
        }
    }

    /// Parse every question file under `questions_dir` and extract summaries from the
    /// matching stories.
    pub fn build(&self, questions_dir: impl AsRef<Path>) -> Result<Corpus> {
        let files = QuestionScanner::new(questions_dir).scan()?;
        let mut corpus = Corpus::default();

        for path in &files {
            let text = std::fs::read_to_string(path).map_err(|err| CorpusError::io(path, err))?;
            self.add_question(&mut corpus, &text, path)?;
        }

        corpus.stats.articles = corpus.articles.len();
        log::info!(
            "Extracted {} summaries for {} articles ({} question files, {} duplicate pairs, {} highlight-only, {} without matching highlight)",
            corpus.stats.summaries,
            corpus.stats.articles,
            corpus.stats.question_files,
            corpus.stats.duplicate_pairs,
            corpus.stats.highlight_only,
            corpus.stats.no_matching_highlight,
        );
        Ok(corpus)
    }

    /// Fold one question file into the corpus.
    pub fn add_question(&self, corpus: &mut Corpus, text: &str, path: &Path) -> Result<()> {
        let question = parse_question(self.extractor.tokenizer(), text, path)?;
        corpus.stats.question_files += 1;

        let article = corpus
            .articles
            .entry(question.url.clone())
            .or_insert_with(|| ArticleRecord::new(question.entities.clone()));

        // Several question files share a (url, query) pair; skip re-reading the story.
        if article.has_query(&question.query_key()) {
            corpus.stats.duplicate_pairs += 1;
            return Ok(());
        }

        let outcome = self
            .extractor
            .extract(&question.query, article, &question.url)?;
        log::debug!("{}: {:?}", path.display(), outcome);
        corpus.stats.add_outcome(outcome);

        corpus.stats.extractions += 1;
        if corpus.stats.extractions % PROGRESS_INTERVAL == 0 {
            log::info!("{} items processed...", corpus.stats.extractions);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::hash_hex;
    use pretty_assertions::assert_eq;
    use rcsum_text::TreebankTokenizer;
    use std::fs;
    use tempfile::tempdir;

    fn question(url: &str, answer: &str) -> String {
        format!(
            "{url}\n\nbody\n\n@placeholder text\n\n@entity1\n\n@entity0:CNN\n@entity1:{answer}\n"
        )
    }

    fn write_story(dir: &Path, url: &str, text: &str) {
        fs::write(dir.join(format!("{}.story", hash_hex(url))), text).unwrap();
    }

    #[test]
    fn aggregates_queries_per_url() {
        let temp = tempdir().unwrap();
        let stories = temp.path().join("stories");
        let questions = temp.path().join("questions").join("training");
        fs::create_dir_all(&stories).unwrap();
        fs::create_dir_all(&questions).unwrap();

        let url = "http://example.com/cats";
        write_story(
            &stories,
            url,
            "The cat sat near the dog. Nobody moved.\n\n@highlight\n\ncat sat\n\n@highlight\n\ndog barked",
        );
        fs::write(questions.join("1.question"), question(url, "cat")).unwrap();
        fs::write(questions.join("2.question"), question(url, "Cat")).unwrap();
        fs::write(questions.join("3.question"), question(url, "dog")).unwrap();
        fs::write(questions.join("4.question"), question(url, "horse")).unwrap();

        let builder = CorpusBuilder::new(TreebankTokenizer::new(), &stories);
        let corpus = builder.build(temp.path().join("questions")).unwrap();

        assert_eq!(corpus.articles.len(), 1);
        let article = &corpus.articles[url];
        let mut queries: Vec<_> = article.query_to_summaries.keys().cloned().collect();
        queries.sort();
        assert_eq!(queries, vec!["cat", "dog"]);
        assert_eq!(article.entities, "cnn\ncat");

        assert_eq!(
            corpus.stats,
            ExtractionStats {
                question_files: 4,
                extractions: 3,
                duplicate_pairs: 1,
                highlight_only: 0,
                no_matching_highlight: 1,
                summaries: 2,
                articles: 1,
            }
        );
    }

    #[test]
    fn urls_without_summaries_are_kept_in_lookup() {
        let temp = tempdir().unwrap();
        let url = "http://example.com/highlights-only";
        write_story(temp.path(), url, "@highlight\n\ncat sat");
        fs::write(temp.path().join("q.question"), question(url, "cat")).unwrap();

        let corpus = CorpusBuilder::new(TreebankTokenizer::new(), temp.path())
            .build(temp.path())
            .unwrap();
        assert!(!corpus.articles[url].has_summaries());
        assert_eq!(corpus.stats.highlight_only, 1);
    }

    #[test]
    fn missing_story_aborts_the_run() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("q.question"),
            question("http://example.com/missing", "cat"),
        )
        .unwrap();

        let err = CorpusBuilder::new(TreebankTokenizer::new(), temp.path())
            .build(temp.path())
            .unwrap_err();
        assert!(matches!(err, CorpusError::StoryNotFound { .. }));
    }
}
