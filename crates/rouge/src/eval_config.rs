use crate::error::{Result, RougeError};
use regex::Regex;
use std::fmt::Write as _;
use std::path::Path;

/// One `<EVAL>` block: a system summary and its references
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalTask {
    pub system_file: String,
    pub model_files: Vec<String>,
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| RougeError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Pair system files with reference files.
///
/// The system pattern is matched at the start of each name and its first group is the
/// summary id; the id (escaped) replaces `#ID#` in the model pattern, which must match a
/// reference name completely. Tasks and references come out in name order.
pub fn match_tasks(
    system_files: &[String],
    model_files: &[String],
    system_pattern: &str,
    model_pattern: &str,
) -> Result<Vec<EvalTask>> {
    let system_regex = compile(&format!("^(?:{system_pattern})"))?;

    let mut system_files: Vec<&String> = system_files.iter().collect();
    system_files.sort();
    let mut model_files: Vec<&String> = model_files.iter().collect();
    model_files.sort();

    let mut tasks = Vec::new();
    for system_file in system_files {
        let Some(id) = system_regex
            .captures(system_file)
            .and_then(|caps| caps.get(1))
            .map(|id| id.as_str())
        else {
            log::debug!("Ignoring {system_file}: does not match system pattern");
            continue;
        };

        let model_regex = compile(&format!(
            "^(?:{})$",
            model_pattern.replace("#ID#", &regex::escape(id))
        ))?;
        let models: Vec<String> = model_files
            .iter()
            .filter(|name| model_regex.is_match(name))
            .map(|name| name.to_string())
            .collect();
        if models.is_empty() {
            return Err(RougeError::MissingReferences(system_file.clone()));
        }

        tasks.push(EvalTask {
            system_file: system_file.clone(),
            model_files: models,
        });
    }
    Ok(tasks)
}

/// ROUGE-1.5.5 XML config over SEE-format summaries.
pub fn render_eval_config(system_root: &Path, model_root: &Path, tasks: &[EvalTask]) -> String {
    let mut xml = String::from("<ROUGE-EVAL version=\"1.0\">\n");
    for (idx, task) in tasks.iter().enumerate() {
        let _ = writeln!(xml, "<EVAL ID=\"{}\">", idx + 1);
        let _ = writeln!(xml, "<MODEL-ROOT>{}</MODEL-ROOT>", model_root.display());
        let _ = writeln!(xml, "<PEER-ROOT>{}</PEER-ROOT>", system_root.display());
        xml.push_str("<INPUT-FORMAT TYPE=\"SEE\">\n</INPUT-FORMAT>\n");
        xml.push_str("<PEERS>\n");
        let _ = writeln!(xml, "<P ID=\"1\">{}</P>", task.system_file);
        xml.push_str("</PEERS>\n<MODELS>\n");
        for (model_idx, model) in task.model_files.iter().enumerate() {
            let letter = char::from_u32(u32::from(b'A') + model_idx as u32).unwrap_or('?');
            let _ = writeln!(xml, "<M ID=\"{letter}\">{model}</M>");
        }
        xml.push_str("</MODELS>\n</EVAL>\n");
    }
    xml.push_str("</ROUGE-EVAL>\n");
    xml
}
