//! Scan cursor
//!
//! The cursor is the scanner's only state: a byte position into the text
//! that never moves backwards. Matchers inspect the text around it through
//! the helpers here and hand back the position to advance to.

use crate::string_utils::char_len_at;

/// Forward-only position into the text being scanned.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Cursor anchored at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Bytes left between the cursor and the end of the text.
    pub fn remaining(&self) -> usize {
        self.text.len() - self.pos
    }

    /// Byte at `pos + offset`, if any.
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<u8> {
        self.byte_at(self.pos + offset)
    }

    /// Byte at an absolute index, if any.
    #[inline]
    pub fn byte_at(&self, index: usize) -> Option<u8> {
        self.text.as_bytes().get(index).copied()
    }

    /// True at the start of the text or directly after a `\n`.
    pub fn is_line_start(&self) -> bool {
        self.pos == 0 || self.byte_at(self.pos - 1) == Some(b'\n')
    }

    /// Index of the next `\n` at or after `from`, or the end of the text.
    pub fn line_end(&self, from: usize) -> usize {
        self.text.as_bytes()[from.min(self.text.len())..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(self.text.len(), |offset| from + offset)
    }

    /// Byte width of the character under the cursor (0 at the end).
    pub fn char_width(&self) -> usize {
        char_len_at(self.text, self.pos)
    }

    /// Move to `next`. Moving backwards is a bug in a matcher.
    pub fn advance_to(&mut self, next: usize) {
        debug_assert!(next > self.pos, "cursor must advance: {} -> {}", self.pos, next);
        debug_assert!(next <= self.text.len());
        self.pos = next;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
