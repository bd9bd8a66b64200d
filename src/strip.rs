//! Comment stripping for relaxed JSON documents.
//!
//! The data document may carry `//` line comments and `/* */` block comments
//! anywhere outside quoted strings. [`strip_comments`] removes them in a
//! single forward pass so the result can be handed to a strict JSON parser.
//!
//! This is deliberately not a second JSON grammar. The scanner tracks three
//! flags (inside a quoted string, pending escape, inside a comment) and
//! nothing else. Known limitation: `"` and `'` both toggle the same quoted
//! flag, so an unescaped apostrophe inside a double-quoted string mis-toggles
//! the quote state. Documents targeted by this tool do not mix the two, and
//! the behavior is kept as is.

use std::borrow::Cow;

/// Removes `//` and `/* */` comments from `raw`, respecting quoted strings
/// and backslash escapes.
///
/// The output contains no bytes that were not present in the input. Line
/// comments are consumed up to (not including) the trailing newline; a line
/// comment terminated by end of input is fine. If the scanner reaches end of
/// input while still inside a quoted string, a pending escape, or an
/// unterminated block comment, the original bytes are returned unchanged and
/// the downstream parser surfaces the syntax error. Partial stripping is
/// never returned.
pub fn strip_comments(raw: &[u8]) -> Cow<'_, [u8]> {
    let mut quoted = false;
    let mut escaped = false;
    let mut comment = false;

    let mut out = Vec::with_capacity(raw.len());

    let mut i = 0;
    while i < raw.len() {
        let b = raw[i];

        if comment {
            // The byte right after the opening '/' picks the comment kind.
            match b {
                b'/' => {
                    comment = false;
                    match raw[i + 1..].iter().position(|&c| c == b'\n') {
                        // Land on the newline so it is emitted next iteration.
                        Some(j) => i += j,
                        None => i = raw.len(),
                    }
                }
                b'*' => match raw[i + 1..].windows(2).position(|w| w == b"*/") {
                    Some(j) => {
                        i += j + 2;
                        comment = false;
                    }
                    None => i = raw.len(),
                },
                _ => {}
            }
            i += 1;
            continue;
        }

        if escaped {
            // The escaped byte is emitted verbatim, never interpreted as a
            // quote or comment starter.
            escaped = false;
            out.push(b);
            i += 1;
            continue;
        }

        if b == b'\\' && quoted {
            escaped = true;
            out.push(b);
            i += 1;
            continue;
        }

        if b == b'"' || b == b'\'' {
            quoted = !quoted;
        }

        if b == b'/' && !quoted {
            comment = true;
            i += 1;
            continue;
        }

        out.push(b);
        i += 1;
    }

    if quoted || escaped || comment {
        // Unexpected end state: hand the original bytes to the parser and
        // let it report the syntax error.
        return Cow::Borrowed(raw);
    }

    Cow::Owned(out)
}
