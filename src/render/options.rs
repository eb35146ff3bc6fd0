//! Render options
//!
//! Output formats and presentation settings for scanned spans.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ─────────────────────────────────────────────────────────────────────────────
// Output Format
// ─────────────────────────────────────────────────────────────────────────────

/// How scanned spans are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per span: offsets, kind, quoted text
    #[default]
    Listing,
    /// Pretty-printed JSON array of spans
    Json,
    /// HTML with one classed `<span>` per styled span
    Html,
}

impl OutputFormat {
    /// Get the display label for this format.
    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Listing => "listing",
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
        }
    }

    /// Get all available output formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Listing, OutputFormat::Json, OutputFormat::Html]
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::all()
            .iter()
            .copied()
            .find(|format| format.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown output format '{}' (expected listing, json or html)", s))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Render Options
// ─────────────────────────────────────────────────────────────────────────────

/// Presentation settings passed to [`crate::render::render`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RenderOptions {
    /// Wrap HTML output in a complete document with inlined CSS
    pub standalone: bool,
    /// Document title for standalone HTML
    pub title: Option<String>,
}

impl RenderOptions {
    /// Options for a standalone HTML document.
    pub fn standalone(title: Option<String>) -> Self {
        Self {
            standalone: true,
            title,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
