//! Presentation layer for scanned spans
//!
//! The scanner only classifies text; this module decides how classified
//! spans are shown. It is deliberately separate so a host can swap in its
//! own renderer (a GUI text widget, a terminal, ...) without touching the
//! scanner.
//!
//! # Architecture
//!
//! - `options.rs` - Output formats and presentation settings
//! - `html.rs` - Classed `<span>` HTML fragments and standalone documents
//! - `listing.rs` - Plain-text span listing for debugging

pub mod html;
pub mod listing;
pub mod options;

pub use html::{html_escape, render_document, render_fragment};
pub use listing::render_listing;
pub use options::{OutputFormat, RenderOptions};

use crate::error::Result;
use crate::scanner::Span;

/// Render spans in the requested format.
pub fn render(spans: &[Span], format: OutputFormat, options: &RenderOptions) -> Result<String> {
    let output = match format {
        OutputFormat::Listing => render_listing(spans),
        OutputFormat::Json => serde_json::to_string_pretty(spans)?,
        OutputFormat::Html if options.standalone => {
            render_document(spans, options.title.as_deref())
        }
        OutputFormat::Html => render_fragment(spans),
    };
    Ok(output)
}
