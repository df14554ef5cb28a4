//! Syntactic ISBN validation.
//!
//! A candidate is accepted when it is exactly 10 or exactly 13 ASCII digits.
//! No checksum is computed and hyphenated or spaced forms are rejected.

/// Returns true if `candidate` is a syntactically valid ISBN-10 or ISBN-13.
pub fn is_valid(candidate: &str) -> bool {
    let len = candidate.len();
    (len == 10 || len == 13) && candidate.bytes().all(|b| b.is_ascii_digit())
}
