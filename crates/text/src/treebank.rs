use crate::segment::split_sentences;
use crate::Tokenizer;
use once_cell::sync::Lazy;
use regex::Regex;

type Rule = (Regex, &'static str);

fn compile(rules: &[(&str, &'static str)]) -> Vec<Rule> {
    rules
        .iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).expect("static regex"), *replacement))
        .collect()
}

static STARTING_QUOTES: Lazy<Vec<Rule>> = Lazy::new(|| {
    compile(&[
        (r"([«“‘„]|`+)", " ${1} "),
        (r#"^""#, "``"),
        (r"(``)", " ${1} "),
        (r#"([ (\[{<])("|'')"#, "${1} `` "),
    ])
});

static PUNCTUATION: Lazy<Vec<Rule>> = Lazy::new(|| {
    compile(&[
        (r"([:,])([^\d])", " ${1} ${2}"),
        (r"([:,])$", " ${1} "),
        (r"\.{2,}", " ${0} "),
        (r"[;@#$%&]", " ${0} "),
        (r#"([^.])(\.)([\])}>"']*)\s*$"#, "${1} ${2}${3} "),
        (r"[?!]", " ${0} "),
        (r"([^'])' ", "${1} ' "),
        (r"[*]", " ${0} "),
    ])
});

static BRACKETS: Lazy<Vec<Rule>> = Lazy::new(|| {
    compile(&[(r"[\]\[(){}<>]", " ${0} "), (r"--", " -- ")])
});

static ENDING_QUOTES: Lazy<Vec<Rule>> = Lazy::new(|| {
    compile(&[
        (r"([»”’])", " ${1} "),
        (r"''", " '' "),
        (r#"""#, " '' "),
        (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
        (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
    ])
});

static CONTRACTIONS: Lazy<Vec<Rule>> = Lazy::new(|| {
    compile(&[
        (r"(?i)\b(can)(not)\b", " ${1} ${2} "),
        (r"(?i)\b(d)('ye)\b", " ${1} ${2} "),
        (r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
        (r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
        (r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
        (r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
        (r"(?i)\b(more)('n)\b", " ${1} ${2} "),
        (r"(?i)\b(wan)(na)\s", " ${1} ${2} "),
        (r"(?i) ('t)(is)\b", " ${1} ${2} "),
        (r"(?i) ('t)(was)\b", " ${1} ${2} "),
    ])
});

fn apply(rules: &[Rule], text: String) -> String {
    rules.iter().fold(text, |acc, (regex, replacement)| {
        regex.replace_all(&acc, *replacement).into_owned()
    })
}

/// Penn-Treebank-style word tokenizer over Unicode sentence segmentation.
///
/// Punctuation, brackets and clitics (`'s`, `n't`, ...) become separate tokens; periods are
/// only split off at the end of a sentence, so `U.S.` survives mid-sentence.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreebankTokenizer;

impl TreebankTokenizer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenize one sentence.
    pub fn tokenize_sentence(&self, sentence: &str) -> Vec<String> {
        let text = apply(&STARTING_QUOTES, sentence.to_string());
        let text = apply(&PUNCTUATION, text);
        let text = apply(&BRACKETS, text);
        let text = apply(&ENDING_QUOTES, format!(" {text} "));
        let text = apply(&CONTRACTIONS, text);
        text.split_whitespace().map(str::to_string).collect()
    }
}

impl Tokenizer for TreebankTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.segment_sentences(text)
            .iter()
            .flat_map(|sentence| self.tokenize_sentence(sentence))
            .collect()
    }

    fn segment_sentences(&self, paragraph: &str) -> Vec<String> {
        split_sentences(paragraph)
    }
}
