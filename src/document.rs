//! Markdown-aware text unit
//!
//! [`MarkdownText`] is what an editing surface holds in place of a plain text
//! unit: the current text plus the spans it renders from. Every text change
//! discards the old spans and rescans from scratch; there is no incremental
//! update. The unit also round-trips through the JSON form editors persist.
//!
//! # Example
//! ```
//! use marklite::document::MarkdownText;
//!
//! let mut unit = MarkdownText::new("plain");
//! unit.set_text("**bold**");
//! assert_eq!(unit.revision(), 1);
//! assert_eq!(unit.styled_spans().count(), 1);
//! ```

use crate::error::{Error, Result};
use crate::scanner::{scan_with, ScanOptions, Span};
use log::debug;
use serde::{Deserialize, Serialize};

/// Type tag written into serialized text units.
pub const UNIT_TYPE: &str = "markdown-text";

/// Current serialized format version.
pub const UNIT_VERSION: u32 = 1;

// ─────────────────────────────────────────────────────────────────────────────
// Serialized Form
// ─────────────────────────────────────────────────────────────────────────────

/// On-disk / clipboard representation of a text unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedMarkdownText {
    #[serde(rename = "type")]
    pub unit_type: String,
    pub version: u32,
    pub text: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// MarkdownText
// ─────────────────────────────────────────────────────────────────────────────

/// A text unit that owns its scanner-classified rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownText {
    text: String,
    spans: Vec<Span>,
    options: ScanOptions,
    revision: u64,
}

impl Default for MarkdownText {
    fn default() -> Self {
        Self::new("")
    }
}

impl MarkdownText {
    /// Create a unit and scan its text with default options.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_options(text, ScanOptions::default())
    }

    pub fn with_options(text: impl Into<String>, options: ScanOptions) -> Self {
        let text = text.into();
        let spans = scan_with(&text, &options);
        Self {
            text,
            spans,
            options,
            revision: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// Number of text changes applied since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the text and rescan. Returns `false` if the text was unchanged.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.text {
            return false;
        }
        self.text = text;
        self.rescan();
        self.revision += 1;
        true
    }

    /// Change scan options. Spans are recomputed; the text revision is not bumped.
    pub fn set_options(&mut self, options: ScanOptions) {
        if options != self.options {
            self.options = options;
            self.rescan();
        }
    }

    /// Spans carrying styled content (bold, italic, headings, list items...).
    pub fn styled_spans(&self) -> impl Iterator<Item = &Span> {
        self.spans.iter().filter(|span| span.is_styled())
    }

    fn rescan(&mut self) {
        self.spans = scan_with(&self.text, &self.options);
        debug!(
            "Rescanned text unit ({} bytes, {} spans)",
            self.text.len(),
            self.spans.len()
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Serialization
    // ─────────────────────────────────────────────────────────────────────────

    pub fn to_serialized(&self) -> SerializedMarkdownText {
        SerializedMarkdownText {
            unit_type: UNIT_TYPE.to_string(),
            version: UNIT_VERSION,
            text: self.text.clone(),
        }
    }

    /// Rebuild a unit from its serialized form, rejecting foreign types and
    /// versions this build does not understand.
    pub fn from_serialized(serialized: SerializedMarkdownText) -> Result<Self> {
        if serialized.unit_type != UNIT_TYPE {
            return Err(Error::Document(format!(
                "expected type '{}', found '{}'",
                UNIT_TYPE, serialized.unit_type
            )));
        }
        if serialized.version == 0 || serialized.version > UNIT_VERSION {
            return Err(Error::Document(format!(
                "unsupported version {}",
                serialized.version
            )));
        }
        Ok(Self::new(serialized.text))
    }

    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_serialized())?)
    }

    pub fn import_json(json: &str) -> Result<Self> {
        let serialized: SerializedMarkdownText = serde_json::from_str(json)?;
        Self::from_serialized(serialized)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
