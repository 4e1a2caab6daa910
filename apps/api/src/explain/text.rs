//! Text normalization and sentence splitting for resume / JD input.

/// Collapses every whitespace run (newlines included) to a single space and trims the ends.
/// Empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lazy sentence iterator over raw (un-normalized) text.
///
/// Boundaries: any newline, or `.` / `!` / `?` followed by whitespace.
/// Splitting happens before newlines are collapsed so line-based resumes keep
/// one bullet per sentence. Each yielded sentence is normalized and non-empty.
pub struct Sentences<'a> {
    rest: &'a str,
}

impl<'a> Sentences<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl Iterator for Sentences<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while !self.rest.is_empty() {
            let (fragment, rest) = split_at_boundary(self.rest);
            self.rest = rest;

            let sentence = normalize(fragment);
            if !sentence.is_empty() {
                return Some(sentence);
            }
        }
        None
    }
}

/// Splits off the first sentence fragment. The terminator stays with the fragment;
/// the newline or following whitespace goes to the remainder.
fn split_at_boundary(text: &str) -> (&str, &str) {
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if c == '\n' || c == '\r' {
            return (&text[..idx], &text[idx + c.len_utf8()..]);
        }
        if matches!(c, '.' | '!' | '?') {
            if let Some(&(next_idx, next)) = chars.peek() {
                if next.is_whitespace() {
                    return (&text[..next_idx], &text[next_idx..]);
                }
            }
        }
    }

    (text, "")
}
