use crate::error::{CorpusError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default output directory of the offset utility
pub const DEFAULT_OFFSET_DIR: &str = "query_offset_files";

static QUERY_FILE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\.(\d+)\.(.*)$").expect("static regex"));

/// `<doc>.<query>.<rest>` split out of a file name
#[derive(Debug, Clone, PartialEq, Eq)]
struct QueryFileName {
    document_id: String,
    query_id: u64,
    rest: String,
}

impl QueryFileName {
    fn parse(name: &str) -> Option<Self> {
        let caps = QUERY_FILE_NAME.captures(name)?;
        Some(Self {
            document_id: caps[1].to_string(),
            query_id: caps[2].parse().ok()?,
            rest: caps[3].to_string(),
        })
    }
}

/// Files copied and skipped by [`offset_query_files`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OffsetSummary {
    pub copied: usize,
    pub skipped: usize,
}

/// Next query id within a document, wrapping `n` back to `1`.
pub fn offset_query_id(query_id: u64, num_queries: u64) -> u64 {
    query_id % num_queries + 1
}

/// Copy every `<doc>.<q>.<rest>` file in `source_dir` to `<out_dir>/<doc>.<q'>.<rest>`,
/// where `q' = (q mod n) + 1` and `n` is the number of files for `<doc>`.
///
/// Pairs each query with a different query of the same document, e.g. to score summaries
/// against references written for another query.
pub fn offset_query_files(source_dir: &Path, out_dir: &Path) -> Result<OffsetSummary> {
    let mut files: Vec<(PathBuf, QueryFileName)> = Vec::new();
    let mut summary = OffsetSummary::default();

    let entries = fs::read_dir(source_dir).map_err(|err| CorpusError::io(source_dir, err))?;
    for entry in entries {
        let entry = entry.map_err(|err| CorpusError::io(source_dir, err))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name();
        match name.to_str().and_then(QueryFileName::parse) {
            Some(parsed) => files.push((path, parsed)),
            None => {
                log::warn!("Skipping {}: not named <doc>.<query>.<rest>", path.display());
                summary.skipped += 1;
            }
        }
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));

    let mut document_to_num_queries: HashMap<&str, u64> = HashMap::new();
    for (_, parsed) in &files {
        *document_to_num_queries
            .entry(parsed.document_id.as_str())
            .or_insert(0) += 1;
    }

    fs::create_dir_all(out_dir).map_err(|err| CorpusError::io(out_dir, err))?;

    for (path, parsed) in &files {
        let num_queries = document_to_num_queries[parsed.document_id.as_str()];
        let out_path = out_dir.join(format!(
            "{}.{}.{}",
            parsed.document_id,
            offset_query_id(parsed.query_id, num_queries),
            parsed.rest
        ));
        let content = fs::read(path).map_err(|err| CorpusError::io(path, err))?;
        fs::write(&out_path, content).map_err(|err| CorpusError::io(&out_path, err))?;
        summary.copied += 1;
    }

    log::info!(
        "Offset {} files into {} ({} skipped)",
        summary.copied,
        out_dir.display(),
        summary.skipped
    );
    Ok(summary)
}
