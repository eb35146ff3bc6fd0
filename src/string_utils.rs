//! UTF-8 Safe String Utilities
//!
//! Span offsets are byte offsets into the scanned `&str`. The scanner only
//! ever compares ASCII delimiter bytes, but it must never split a multi-byte
//! character when it falls back to emitting literal text. These helpers keep
//! every offset on a character boundary and convert byte offsets to
//! character (Unicode scalar) offsets for hosts that count characters.
//!
//! # Example
//! ```
//! use marklite::string_utils::{byte_index_to_char_index, char_len_at};
//!
//! let text = "på **deg**";
//! assert_eq!(char_len_at(text, 1), 2); // 'å'
//! assert_eq!(byte_index_to_char_index(text, 4), 3);
//! ```

// ─────────────────────────────────────────────────────────────────────────────
// Character Boundary Functions
// ─────────────────────────────────────────────────────────────────────────────

/// Returns the largest index `<= index` that lies on a character boundary.
///
/// Indices past the end clamp to `s.len()`.
#[inline]
pub fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut i = index;
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Byte length of the character starting at `index`.
///
/// Returns 0 if `index` is out of bounds or not on a character boundary.
#[inline]
pub fn char_len_at(s: &str, index: usize) -> usize {
    if index >= s.len() || !s.is_char_boundary(index) {
        return 0;
    }
    s[index..].chars().next().map_or(0, char::len_utf8)
}

// ─────────────────────────────────────────────────────────────────────────────
// Index Conversion
// ─────────────────────────────────────────────────────────────────────────────

/// Convert a byte index to a character index.
///
/// A byte index inside a multi-byte character counts up to, but not
/// including, that character.
pub fn byte_index_to_char_index(s: &str, byte_index: usize) -> usize {
    let byte_index = floor_char_boundary(s, byte_index);
    s[..byte_index].chars().count()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
