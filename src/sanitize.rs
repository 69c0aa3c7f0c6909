//! Keystroke filter for side-length fields.
//!
//! Pure functions, no I/O. A field may only ever contain ASCII digits and
//! at most one decimal point; this module decides which keystrokes keep
//! it that way. It is not a validity gate: "" and "." pass the filter but
//! do not parse as numbers.

/// A keystroke aimed at a side-length field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    Backspace,
    Delete,
    Char(char),
}

const DECIMAL_POINT: char = '.';

/// Should `key` reach a field whose current text is `field_text`?
///
/// Deletions always pass. Digits always pass. A decimal point passes only
/// if the field has none yet. Everything else is swallowed.
pub fn admits(field_text: &str, key: Keystroke) -> bool {
    match key {
        Keystroke::Backspace | Keystroke::Delete => true,
        Keystroke::Char(c) if c.is_ascii_digit() => true,
        Keystroke::Char(DECIMAL_POINT) => !field_text.contains(DECIMAL_POINT),
        Keystroke::Char(_) => false,
    }
}

/// Replay `text` through the filter as if it were typed one character
/// at a time, keeping only what would have been accepted.
///
/// "1.2.3" becomes "1.23"; "12ab" becomes "12".
pub fn filter(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if admits(&out, Keystroke::Char(c)) {
            out.push(c);
        }
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================
