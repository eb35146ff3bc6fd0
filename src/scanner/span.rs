//! Span data model
//!
//! A [`Span`] is a classified, non-overlapping slice of the scanned text.
//! A scan produces spans in left-to-right order that together cover the
//! whole input, so concatenating their `text` reconstructs it exactly.

use crate::string_utils::byte_index_to_char_index;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

// ─────────────────────────────────────────────────────────────────────────────
// Heading Level
// ─────────────────────────────────────────────────────────────────────────────

/// Heading level (1-6), taken from the number of leading `#` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", from = "u8")]
pub enum HeadingLevel {
    H1 = 1,
    H2 = 2,
    H3 = 3,
    H4 = 4,
    H5 = 5,
    H6 = 6,
}

impl HeadingLevel {
    /// Numeric level, 1 through 6.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<u8> for HeadingLevel {
    fn from(level: u8) -> Self {
        match level {
            0 | 1 => HeadingLevel::H1,
            2 => HeadingLevel::H2,
            3 => HeadingLevel::H3,
            4 => HeadingLevel::H4,
            5 => HeadingLevel::H5,
            _ => HeadingLevel::H6,
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.as_u8()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Span Kind
// ─────────────────────────────────────────────────────────────────────────────

/// Semantic classification of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    /// Unstyled text, including every line break
    Literal,
    /// Delimiter characters (`**`, `# `, `- `, `1. `, ...)
    SyntaxMarker,
    /// Content between `**`/`__` delimiters
    Bold,
    /// Content between `*`/`_` delimiters
    Italic,
    /// Content between `~~` delimiters
    Strikethrough,
    /// Rest of a line after `#`..`######` and a space
    Heading(HeadingLevel),
    /// Rest of a line after `- ` or `* `
    BulletItem,
    /// Rest of a line after `<digits>. `
    NumberedItem,
}

impl SpanKind {
    /// CSS class names a presentation layer applies to this kind.
    ///
    /// Literal text is rendered without a wrapper and has no class.
    pub fn css_class(&self) -> Option<String> {
        let class = match self {
            SpanKind::Literal => return None,
            SpanKind::SyntaxMarker => "markdown-syntax".to_string(),
            SpanKind::Bold => "markdown-bold".to_string(),
            SpanKind::Italic => "markdown-italic".to_string(),
            SpanKind::Strikethrough => "markdown-strikethrough".to_string(),
            SpanKind::Heading(level) => {
                format!("markdown-heading markdown-h{}", level.as_u8())
            }
            SpanKind::BulletItem | SpanKind::NumberedItem => "markdown-list-item".to_string(),
        };
        Some(class)
    }

    /// Whether this kind carries styled content (not literal text, not a marker).
    pub fn is_styled(&self) -> bool {
        !matches!(self, SpanKind::Literal | SpanKind::SyntaxMarker)
    }

    /// Short label used in listings and logs.
    pub fn label(&self) -> String {
        match self {
            SpanKind::Literal => "Literal".to_string(),
            SpanKind::SyntaxMarker => "SyntaxMarker".to_string(),
            SpanKind::Bold => "Bold".to_string(),
            SpanKind::Italic => "Italic".to_string(),
            SpanKind::Strikethrough => "Strikethrough".to_string(),
            SpanKind::Heading(level) => format!("Heading({})", level.as_u8()),
            SpanKind::BulletItem => "BulletItem".to_string(),
            SpanKind::NumberedItem => "NumberedItem".to_string(),
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Span
// ─────────────────────────────────────────────────────────────────────────────

/// A classified slice of the scanned text.
///
/// `start` and `end` are byte offsets into the scanned `&str` and always lie
/// on character boundaries. Heading and list content may be empty
/// (`start == end`), e.g. for a line that is just `"# "`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub kind: SpanKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a span covering `source[start..end]`.
    pub fn new(kind: SpanKind, source: &str, start: usize, end: usize) -> Self {
        Self {
            kind,
            text: source[start..end].to_string(),
            start,
            end,
        }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn is_styled(&self) -> bool {
        self.kind.is_styled()
    }

    /// Byte range into the scanned text.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Character (Unicode scalar) range, given the text this span came from.
    pub fn char_range(&self, source: &str) -> Range<usize> {
        byte_index_to_char_index(source, self.start)..byte_index_to_char_index(source, self.end)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
