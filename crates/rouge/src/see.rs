use crate::error::{Result, RougeError};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Wrap a plain-text summary (one sentence per line) in the SEE HTML ROUGE reads.
pub fn to_see_html(text: &str, title: &str) -> String {
    let mut elems = String::new();
    for (idx, sentence) in text.split('\n').enumerate() {
        let i = idx + 1;
        if idx > 0 {
            elems.push('\n');
        }
        let _ = write!(
            elems,
            "<a name=\"{i}\">[{i}]</a> <a href=\"#{i}\" id={i}>{sentence}</a>"
        );
    }
    format!(
        "<html>\n<head>\n<title>{title}</title>\n</head>\n<body bgcolor=\"white\">\n{elems}\n</body>\n</html>"
    )
}

/// Convert every regular file in `source` into `target` under the same name.
pub fn convert_dir(source: &Path, target: &Path) -> Result<usize> {
    fs::create_dir_all(target).map_err(|err| RougeError::io(target, err))?;

    let mut converted = 0;
    let entries = fs::read_dir(source).map_err(|err| RougeError::io(source, err))?;
    for entry in entries {
        let entry = entry.map_err(|err| RougeError::io(source, err))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let text = fs::read_to_string(&path).map_err(|err| RougeError::io(&path, err))?;
        let name = entry.file_name();
        let html = to_see_html(&text, &name.to_string_lossy());
        let out = target.join(&name);
        fs::write(&out, html).map_err(|err| RougeError::io(&out, err))?;
        converted += 1;
    }
    log::debug!(
        "Converted {converted} summaries from {} to SEE format",
        source.display()
    );
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers_each_line() {
        let html = to_see_html("cat sat\ndog ran", "1.1.txt");
        assert_eq!(
            html,
            "<html>\n<head>\n<title>1.1.txt</title>\n</head>\n<body bgcolor=\"white\">\n\
             <a name=\"1\">[1]</a> <a href=\"#1\" id=1>cat sat</a>\n\
             <a name=\"2\">[2]</a> <a href=\"#2\" id=2>dog ran</a>\n\
             </body>\n</html>"
        );
    }
}
