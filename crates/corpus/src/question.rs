use crate::error::{CorpusError, Result};
use rcsum_text::{join_tokens, normalized_tokens, Tokenizer};
use std::path::Path;

/// File suffix of cloze question files
pub const QUESTION_SUFFIX: &str = ".question";

const URL_LINE: usize = 0;
const PLACEHOLDER_LINE: usize = 6;
const FIRST_ENTITY_LINE: usize = 8;

/// What one question file contributes to the corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    /// Source url of the article the question was generated from
    pub url: String,

    /// Tokenized literal text of the answer entity
    pub query: Vec<String>,

    /// Every entity name tokenized, one per line, in table order
    pub entities: String,
}

impl QuestionRecord {
    /// Joined query tokens, used as the per-article query key
    #[must_use]
    pub fn query_key(&self) -> String {
        join_tokens(&self.query)
    }
}

/// Entity id -> literal text, in first-seen order.
#[derive(Debug, Default)]
struct EntityTable {
    entries: Vec<(String, String)>,
}

impl EntityTable {
    fn insert(&mut self, id: &str, name: &str) {
        match self.entries.iter_mut().find(|(existing, _)| existing == id) {
            Some(entry) => entry.1 = name.to_string(),
            None => self.entries.push((id.to_string(), name.to_string())),
        }
    }

    fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, name)| name.as_str())
    }

    fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, name)| name.as_str())
    }
}

/// Parse a question file.
///
/// Layout: line 0 is the url, line 6 the answer placeholder (e.g. `@entity3`), lines 8 and
/// on map placeholders to literal text as `@entity3:Barack Obama`. `path` is only used for
/// error messages.
pub fn parse_question<T: Tokenizer + ?Sized>(
    tokenizer: &T,
    text: &str,
    path: &Path,
) -> Result<QuestionRecord> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() <= PLACEHOLDER_LINE {
        return Err(CorpusError::malformed(
            path,
            format!("expected at least {} lines, found {}", PLACEHOLDER_LINE + 1, lines.len()),
        ));
    }

    let url = lines[URL_LINE];
    let placeholder = lines[PLACEHOLDER_LINE];

    let mut table = EntityTable::default();
    for line in lines.iter().skip(FIRST_ENTITY_LINE) {
        if line.trim().is_empty() {
            continue;
        }
        let Some((id, name)) = line.split_once(':') else {
            return Err(CorpusError::malformed(
                path,
                format!("entity mapping without ':' separator: {line:?}"),
            ));
        };
        table.insert(id, name);
    }

    let Some(answer) = table.get(placeholder) else {
        return Err(CorpusError::malformed(
            path,
            format!("placeholder {placeholder:?} missing from entity table"),
        ));
    };

    let query = normalized_tokens(tokenizer, answer);
    let entities = table
        .names()
        .map(|name| join_tokens(&normalized_tokens(tokenizer, name)))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(QuestionRecord {
        url: url.to_string(),
        query,
        entities,
    })
}
