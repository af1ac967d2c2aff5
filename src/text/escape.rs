//! Escape helpers shared by the substitution stages.
//!
//! Two escape characters exist. The internal escape (`\`) protects the
//! working markers while the engine runs and never reaches the output. The
//! output escape (soft hyphen) protects literal quote markers typed by the
//! user and stays in the coded text until decoding removes it.
//!
//! Escapes always come in pairs: the escape character followed by the
//! character it protects. Pairs are read left to right, so an escape that is
//! itself escaped does not escape its neighbour.

use crate::tables::{END_MARKER, INTERNAL_ESCAPE, OUTPUT_ESCAPE, QUOTE_MARKER, START_MARKER};

/// Prefixes every character in `targets`, and `escape` itself, with `escape`.
pub fn escape_with(input: &str, escape: char, targets: &[char]) -> String {
    let mut result = String::with_capacity(input.len() * 2);
    for c in input.chars() {
        if c == escape || targets.contains(&c) {
            result.push(escape);
        }
        result.push(c);
    }
    result
}

/// Drops every `escape` character, keeping the character it protects.
pub fn unescape_with(input: &str, escape: char) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c == escape {
            match chars.next() {
                Some(protected) => result.push(protected),
                None => result.push(c),
            }
        } else {
            result.push(c);
        }
    }
    result
}

/// Protects literal quote markers (and soft hyphens) in Human text.
pub fn output_escape(input: &str) -> String {
    escape_with(input, OUTPUT_ESCAPE, &[QUOTE_MARKER])
}

/// Reverses [`output_escape`].
pub fn output_unescape(input: &str) -> String {
    unescape_with(input, OUTPUT_ESCAPE)
}

/// Protects working markers (and backslashes) already present in the input.
pub fn internal_escape(input: &str) -> String {
    escape_with(input, INTERNAL_ESCAPE, &[START_MARKER, END_MARKER])
}

/// Marks escape characters and the positions they protect.
///
/// Both escape characters are recognised.
pub fn escaped_positions(chars: &[char]) -> Vec<bool> {
    let mut escaped = vec![false; chars.len()];
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if (c == INTERNAL_ESCAPE || c == OUTPUT_ESCAPE) && i + 1 < chars.len() {
            escaped[i] = true;
            escaped[i + 1] = true;
            i += 2;
        } else {
            i += 1;
        }
    }
    escaped
}

/// Removes unescaped working markers and undoes [`internal_escape`] in one pass.
pub fn strip_markers(chars: &[char]) -> String {
    let mut result = String::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == INTERNAL_ESCAPE && i + 1 < chars.len() {
            result.push(chars[i + 1]);
            i += 2;
            continue;
        }
        if c != START_MARKER && c != END_MARKER {
            result.push(c);
        }
        i += 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_escape_roundtrip() {
        let input = "I'm \u{00AD}here";
        let escaped = output_escape(input);
        assert_eq!(escaped, "I\u{00AD}'m \u{00AD}\u{00AD}here");
        assert_eq!(output_unescape(&escaped), input);
    }

    #[test]
    fn test_escaped_escape_does_not_leak() {
        // soft hyphen, soft hyphen, quote: only the first pair is escaped
        let chars: Vec<char> = "\u{00AD}\u{00AD}'x".chars().collect();
        assert_eq!(escaped_positions(&chars), vec![true, true, false, false]);
    }

    #[test]
    fn test_strip_markers_keeps_escaped_markers() {
        let escaped = internal_escape("a\u{FFF0}b\\");
        let mut chars: Vec<char> = escaped.chars().collect();
        chars.insert(0, START_MARKER);
        chars.push(END_MARKER);
        assert_eq!(strip_markers(&chars), "a\u{FFF0}b\\");
    }

    #[test]
    fn test_strip_markers_after_escaped_backslash() {
        // an escaped backslash right before a working marker must not protect it
        let mut chars: Vec<char> = internal_escape("\\").chars().collect();
        chars.push(START_MARKER);
        chars.push('x');
        chars.push(END_MARKER);
        assert_eq!(strip_markers(&chars), "\\x");
    }

    #[test]
    fn test_trailing_escape_is_literal() {
        assert_eq!(unescape_with("ab\u{00AD}", OUTPUT_ESCAPE), "ab\u{00AD}");
    }
}
