use once_cell::sync::Lazy;
use regex::Regex;

/// Leading-apostrophe tokens that are real words or clitics and stay intact.
pub const APOSTROPHE_WORDS: &[&str] = &[
    "''", "'s", "'re", "'ve", "'m", "'ll", "'d", "'em", "'n'", "'n", "'cause", "'til", "'twas",
    "'till",
];

// 'g | not '90s
static LEADING_APOSTROPHE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:'\D|'\d+[^s]$)").expect("static regex"));

/// Lowercase a token and detach a stray leading apostrophe (`'hello` -> `' hello`).
pub fn normalize_token(token: &str) -> String {
    let lowered = token.to_lowercase();
    if LEADING_APOSTROPHE.is_match(&lowered) && !APOSTROPHE_WORDS.contains(&lowered.as_str()) {
        format!("' {}", &lowered[1..])
    } else {
        lowered
    }
}
