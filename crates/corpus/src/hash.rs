use sha1::{Digest, Sha1};

/// Lowercase hex SHA-1 of a string.
///
/// Names story files (`<hash>.story`) and orders documents, queries and reference summaries
/// when writing splits, so the digest must never change.
#[must_use]
pub fn hash_hex(text: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());
    hex_encode_lower(&hasher.finalize())
}

fn hex_encode_lower(bytes: &[u8]) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(bytes.len().saturating_mul(2));
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn matches_known_sha1_digests() {
        assert_eq!(hash_hex(""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
        assert_eq!(hash_hex("abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn digest_is_forty_lowercase_hex_chars() {
        let digest = hash_hex("http://www.cnn.com/2015/04/01/world/example/index.html");
        assert_eq!(digest.len(), 40);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
