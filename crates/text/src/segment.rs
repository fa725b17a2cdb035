use unicode_segmentation::UnicodeSegmentation;

/// Titles and corporate suffixes that end in a period without ending the sentence.
const ABBREVIATIONS: &[&str] = &[
    "Mr.", "Mrs.", "Ms.", "Dr.", "St.", "Jr.", "Sr.", "Prof.", "Gen.", "Sen.", "Rep.", "Gov.",
    "Lt.", "Col.", "Sgt.", "Capt.", "Inc.", "Co.", "Corp.", "Ltd.", "vs.", "No.",
];

/// Sentence split on Unicode sentence boundaries, then re-glue segments that UAX #29
/// cut after an abbreviation or an initial.
pub(crate) fn split_sentences(paragraph: &str) -> Vec<String> {
    let mut sentences: Vec<String> = Vec::new();
    let mut pending = String::new();

    for segment in paragraph.split_sentence_bounds() {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        if !pending.is_empty() {
            pending.push(' ');
        }
        pending.push_str(segment);

        if !ends_with_abbreviation(&pending) {
            sentences.push(std::mem::take(&mut pending));
        }
    }

    if !pending.is_empty() {
        sentences.push(pending);
    }
    sentences
}

fn ends_with_abbreviation(text: &str) -> bool {
    let Some(last_word) = text.split_whitespace().last() else {
        return false;
    };
    ABBREVIATIONS.contains(&last_word) || is_initialism(last_word)
}

/// `F.` or `U.S.`: single letters each followed by a period.
fn is_initialism(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() || chars.len() % 2 != 0 {
        return false;
    }
    chars
        .chunks(2)
        .all(|pair| pair[0].is_alphabetic() && pair[1] == '.')
}
