//! Answer normalization.
//!
//! Two answers are equivalent when their normalized forms are identical.
//! Normalization upper-cases ASCII letters and drops ASCII whitespace
//! (space, tab, newline, carriage return, form feed, vertical tab), so
//! `" a b\t"` and `"AB"` compare equal. Non-ASCII whitespace such as a
//! no-break space is significant.

/// Canonicalize a raw answer for comparison.
///
/// Total over all strings: the empty string maps to the empty string, and
/// non-ASCII characters pass through unchanged.
pub fn normalize(answer: &str) -> String {
    answer
        .chars()
        .filter(|&c| !is_answer_whitespace(c))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// The six ASCII whitespace characters. `char::is_ascii_whitespace` omits
/// vertical tab.
pub fn is_answer_whitespace(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

/// Whether two raw answers normalize to the same string.
pub fn answers_equivalent(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
