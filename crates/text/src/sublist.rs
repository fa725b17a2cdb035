/// True if `needle` occurs as a contiguous run inside `haystack`.
///
/// An empty needle is contained in every haystack, including an empty one.
pub fn contains_sublist<T: PartialEq>(haystack: &[T], needle: &[T]) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack
        .windows(needle.len())
        .any(|window| window == needle)
}

/// Join tokens with single spaces.
pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut out = String::new();
    for (idx, token) in tokens.iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        out.push_str(token.as_ref());
    }
    out
}
