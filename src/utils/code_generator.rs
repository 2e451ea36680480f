//! Short id candidate generation.
//!
//! A candidate is the first [`SHORT_ID_LENGTH`] hex characters of
//! `SHA-256(url || hex(salt) || timestamp)`, with a fresh random salt on every
//! call. Uniqueness against the store is checked by
//! [`crate::application::services::IdGenerator`].

use chrono::Utc;
use sha2::{Digest, Sha256};

/// Number of hex characters in a short id.
pub const SHORT_ID_LENGTH: usize = 6;

/// Random salt bytes mixed into each candidate.
const SALT_BYTES: usize = 4;

/// Generates a short id candidate for `url`.
///
/// Two calls with the same URL produce independent candidates.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code("http://example.com");
/// assert_eq!(code.len(), 6);
/// assert!(is_valid_short_id(&code));
/// ```
pub fn generate_code(url: &str) -> String {
    let salt: [u8; SALT_BYTES] = rand::random();
    let timestamp = Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_else(|| Utc::now().timestamp_micros());

    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hasher.update(hex::encode(salt).as_bytes());
    hasher.update(timestamp.to_string().as_bytes());

    let mut code = hex::encode(hasher.finalize());
    code.truncate(SHORT_ID_LENGTH);
    code
}

/// Returns true if `short_id` has the shape of a generated id.
pub fn is_valid_short_id(short_id: &str) -> bool {
    short_id.len() == SHORT_ID_LENGTH
        && short_id
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code("http://example.com");
        assert_eq!(code.len(), SHORT_ID_LENGTH);
    }

    #[test]
    fn test_generate_code_is_lowercase_hex() {
        let code = generate_code("https://rust-lang.org/learn");
        assert!(is_valid_short_id(&code), "unexpected code {code}");
    }

    #[test]
    fn test_generate_code_varies_for_same_url() {
        let mut codes = HashSet::new();

        for _ in 0..200 {
            codes.insert(generate_code("http://example.com"));
        }

        // 16^6 keyspace; a handful of birthday collisions at most
        assert!(codes.len() > 190, "only {} distinct codes", codes.len());
    }

    #[test]
    fn test_valid_short_ids() {
        assert!(is_valid_short_id("abc123"));
        assert!(is_valid_short_id("000000"));
        assert!(is_valid_short_id("ffffff"));
    }

    #[test]
    fn test_invalid_short_ids() {
        assert!(!is_valid_short_id(""));
        assert!(!is_valid_short_id("abc12"));
        assert!(!is_valid_short_id("abc1234"));
        assert!(!is_valid_short_id("ABC123"));
        assert!(!is_valid_short_id("ghijkl"));
        assert!(!is_valid_short_id("stats"));
        assert!(!is_valid_short_id("health"));
    }
}
