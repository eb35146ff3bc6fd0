//! Plain-text span listing
//!
//! A debugging view: one line per span with its byte range, kind and text.
//!
//! ```text
//! 0..2      SyntaxMarker   "**"
//! 2..3      Bold           "x"
//! 3..5      SyntaxMarker   "**"
//! ```

use crate::scanner::Span;
use std::fmt::Write;

/// Render one line per span.
pub fn render_listing(spans: &[Span]) -> String {
    let mut out = String::new();
    for span in spans {
        let range = format!("{}..{}", span.start, span.end);
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "{:<9} {:<14} {:?}",
            range,
            span.kind.label(),
            span.text
        );
    }
    out
}
