//! User settings for marklite
//!
//! This module defines the `Settings` struct that holds the configurable
//! options of the command-line host, with serde support for JSON persistence.

use crate::render::{OutputFormat, RenderOptions};
use crate::scanner::ScanOptions;
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// Persisted settings. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Output format used when none is given on the command line
    pub output_format: OutputFormat,

    /// Merge adjacent literal characters into one span
    pub coalesce_literals: bool,

    /// Emit a complete HTML document instead of a fragment
    pub standalone_html: bool,

    /// Title for standalone HTML documents
    pub html_title: Option<String>,

    /// Largest input accepted, in bytes
    pub max_input_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            coalesce_literals: true,
            standalone_html: false,
            html_title: None,
            max_input_bytes: Self::DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl Settings {
    /// Default input limit (8 MiB).
    pub const DEFAULT_MAX_INPUT_BYTES: usize = 8 * 1024 * 1024;
    /// Smallest accepted input limit (1 KiB).
    pub const MIN_INPUT_BYTES: usize = 1024;
    /// Largest accepted input limit (256 MiB).
    pub const MAX_INPUT_BYTES: usize = 256 * 1024 * 1024;

    /// Scanner options derived from these settings.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            coalesce_literals: self.coalesce_literals,
        }
    }

    /// Render options derived from these settings.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            standalone: self.standalone_html,
            title: self.html_title.clone(),
        }
    }

    /// Clamp out-of-range values and drop blank titles.
    pub fn sanitize(&mut self) {
        self.max_input_bytes = self
            .max_input_bytes
            .clamp(Self::MIN_INPUT_BYTES, Self::MAX_INPUT_BYTES);

        if self
            .html_title
            .as_deref()
            .is_some_and(|title| title.trim().is_empty())
        {
            self.html_title = None;
        }
    }

    /// Parse settings from JSON and sanitize them.
    pub fn from_json_sanitized(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
