//! Inline markdown syntax scanner
//!
//! Turns a flat text buffer into an ordered list of classified [`Span`]s:
//! literal text, syntax markers, and styled runs for bold, italic,
//! strikethrough, headings and list items. The scanner is a pure function.
//! It never fails (malformed or unterminated syntax simply stays literal
//! text), keeps no state between calls, and its output always covers the
//! input exactly, so the span texts concatenate back to the original.
//!
//! # Rules
//! At each cursor position the rules are tried in order, first match wins:
//! 1. Bold `**x**` / `__x__`
//! 2. Italic `*x*` / `_x_`
//! 3. Strikethrough `~~x~~`
//! 4. Heading `# x` .. `###### x` (line start)
//! 5. Bullet item `- x` / `* x` (line start)
//! 6. Numbered item `1. x` (line start)
//!
//! When nothing matches, one character is emitted as literal text.
//!
//! # Example
//! ```
//! use marklite::scanner::{scan, SpanKind};
//!
//! let spans = scan("**x**");
//! let kinds: Vec<_> = spans.iter().map(|s| s.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [SpanKind::SyntaxMarker, SpanKind::Bold, SpanKind::SyntaxMarker]
//! );
//! ```

mod closers;
mod cursor;
pub mod rules;
mod span;

pub use closers::{Closer, CloserIndex};
pub use cursor::Cursor;
pub use rules::{Match, MatchResult, Matcher, Rule};
pub use span::{HeadingLevel, Span, SpanKind};

use log::{debug, trace};

// ─────────────────────────────────────────────────────────────────────────────
// Scan Options
// ─────────────────────────────────────────────────────────────────────────────

/// Output-shape options. They never change span boundaries of styled runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Merge adjacent literal characters into one span. Line breaks are
    /// always kept as their own literal span.
    pub coalesce_literals: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            coalesce_literals: true,
        }
    }
}

impl ScanOptions {
    /// One literal span per unmatched character.
    pub fn per_character() -> Self {
        Self {
            coalesce_literals: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scanning
// ─────────────────────────────────────────────────────────────────────────────

/// Scan `text` with default options (literal runs coalesced).
pub fn scan(text: &str) -> Vec<Span> {
    scan_with(text, &ScanOptions::default())
}

/// Scan `text` into an ordered, gap-free list of spans.
pub fn scan_with(text: &str, options: &ScanOptions) -> Vec<Span> {
    let mut cursor = Cursor::new(text);
    let mut closers = CloserIndex::new(text);
    let mut literals = LiteralRun::new(options.coalesce_literals);
    let mut spans = Vec::new();
    let mut matches = 0usize;

    while !cursor.is_at_end() {
        match rules::first_match(&cursor, &mut closers) {
            Some((rule, found)) => {
                trace!("{:?} matched {}..{}", rule, cursor.position(), found.next);
                literals.flush(text, &mut spans);
                spans.extend(found.spans);
                cursor.advance_to(found.next);
                matches += 1;
            }
            None => {
                let start = cursor.position();
                let end = start + cursor.char_width();
                literals.push(text, start, end, &mut spans);
                cursor.advance_to(end);
            }
        }
    }
    literals.flush(text, &mut spans);

    debug!(
        "Scanned {} bytes into {} spans ({} rule matches, {} closer steps)",
        text.len(),
        spans.len(),
        matches,
        closers.steps()
    );
    spans
}

/// Pending run of unmatched characters.
struct LiteralRun {
    coalesce: bool,
    pending: Option<(usize, usize)>,
}

impl LiteralRun {
    fn new(coalesce: bool) -> Self {
        Self {
            coalesce,
            pending: None,
        }
    }

    fn push(&mut self, text: &str, start: usize, end: usize, out: &mut Vec<Span>) {
        if !self.coalesce || text.as_bytes()[start] == b'\n' {
            self.flush(text, out);
            out.push(Span::new(SpanKind::Literal, text, start, end));
            return;
        }
        self.pending = match self.pending {
            Some((run_start, _)) => Some((run_start, end)),
            None => Some((start, end)),
        };
    }

    fn flush(&mut self, text: &str, out: &mut Vec<Span>) {
        if let Some((start, end)) = self.pending.take() {
            out.push(Span::new(SpanKind::Literal, text, start, end));
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
