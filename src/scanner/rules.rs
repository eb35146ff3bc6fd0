//! Matcher rules
//!
//! Each rule is a stateless function of the cursor: it either declines, or
//! returns the spans to emit and the position to advance to. Rules are tried
//! in [`RULES`] order and the first match wins, which is what keeps `**x**`
//! from being read as two italics. Literal fallback is not a rule here; the
//! scan loop applies it when every rule declines.

use super::closers::{Closer, CloserIndex};
use super::cursor::Cursor;
use super::span::{HeadingLevel, Span, SpanKind};

/// Deepest heading level; further `#` characters are not counted.
const MAX_HEADING_LEVEL: usize = 6;

// ─────────────────────────────────────────────────────────────────────────────
// Match Result
// ─────────────────────────────────────────────────────────────────────────────

/// Spans produced by a successful rule, and where the cursor goes next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub spans: Vec<Span>,
    pub next: usize,
}

/// Outcome of one rule attempt at the cursor.
pub type MatchResult = Option<Match>;

impl Match {
    /// `open` marker, styled content, `close` marker.
    fn delimited(text: &str, kind: SpanKind, open: usize, close: usize, width: usize) -> Self {
        let content_start = open + width;
        let next = close + width;
        Self {
            spans: vec![
                Span::new(SpanKind::SyntaxMarker, text, open, content_start),
                Span::new(kind, text, content_start, close),
                Span::new(SpanKind::SyntaxMarker, text, close, next),
            ],
            next,
        }
    }

    /// Line prefix marker, then styled content up to the end of the line.
    fn line_prefixed(cursor: &Cursor<'_>, kind: SpanKind, marker_end: usize) -> Self {
        let text = cursor.text();
        let line_end = cursor.line_end(marker_end);
        Self {
            spans: vec![
                Span::new(SpanKind::SyntaxMarker, text, cursor.position(), marker_end),
                Span::new(kind, text, marker_end, line_end),
            ],
            next: line_end,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rule Table
// ─────────────────────────────────────────────────────────────────────────────

/// Names of the matcher rules, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Bold,
    Italic,
    Strikethrough,
    Heading,
    BulletItem,
    NumberedItem,
}

pub type Matcher = fn(&Cursor<'_>, &mut CloserIndex<'_>) -> MatchResult;

/// Rules in priority order.
pub const RULES: [(Rule, Matcher); 6] = [
    (Rule::Bold, match_bold),
    (Rule::Italic, match_italic),
    (Rule::Strikethrough, match_strikethrough),
    (Rule::Heading, match_heading),
    (Rule::BulletItem, match_bullet_item),
    (Rule::NumberedItem, match_numbered_item),
];

/// Try every rule at the cursor and return the first match.
pub fn first_match(cursor: &Cursor<'_>, closers: &mut CloserIndex<'_>) -> Option<(Rule, Match)> {
    RULES
        .iter()
        .find_map(|&(rule, matcher)| matcher(cursor, &mut *closers).map(|m| (rule, m)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Inline Rules
// ─────────────────────────────────────────────────────────────────────────────

/// `**bold**` or `__bold__`.
pub fn match_bold(cursor: &Cursor<'_>, closers: &mut CloserIndex<'_>) -> MatchResult {
    if cursor.remaining() < 4 {
        return None;
    }
    let closer = match (cursor.peek(0)?, cursor.peek(1)?) {
        (b'*', b'*') => Closer::DoubleStar,
        (b'_', b'_') => Closer::DoubleUnderscore,
        _ => return None,
    };
    let open = cursor.position();
    // Only the first closer counts; one right after the opener means no match.
    let close = closers.find(closer, open + 2)?;
    if close <= open + 2 {
        return None;
    }
    Some(Match::delimited(cursor.text(), SpanKind::Bold, open, close, 2))
}

/// `*italic*` or `_italic_`, where neither delimiter is one leg of a pair.
pub fn match_italic(cursor: &Cursor<'_>, closers: &mut CloserIndex<'_>) -> MatchResult {
    if cursor.remaining() < 2 {
        return None;
    }
    let delimiter = cursor.peek(0)?;
    let closer = match delimiter {
        b'*' => Closer::Star,
        b'_' => Closer::Underscore,
        _ => return None,
    };
    if cursor.peek(1) == Some(delimiter) {
        return None;
    }
    let open = cursor.position();
    let close = closers.find(closer, open + 1)?;
    if close <= open + 1 {
        return None;
    }
    Some(Match::delimited(cursor.text(), SpanKind::Italic, open, close, 1))
}

/// `~~struck~~`.
pub fn match_strikethrough(cursor: &Cursor<'_>, closers: &mut CloserIndex<'_>) -> MatchResult {
    if cursor.remaining() < 4 || cursor.peek(0) != Some(b'~') || cursor.peek(1) != Some(b'~') {
        return None;
    }
    let open = cursor.position();
    let close = closers.find(Closer::DoubleTilde, open + 2)?;
    if close <= open + 2 {
        return None;
    }
    Some(Match::delimited(
        cursor.text(),
        SpanKind::Strikethrough,
        open,
        close,
        2,
    ))
}

// ─────────────────────────────────────────────────────────────────────────────
// Line-Start Rules
// ─────────────────────────────────────────────────────────────────────────────

/// `#`..`######` followed by a space, at line start.
pub fn match_heading(cursor: &Cursor<'_>, _closers: &mut CloserIndex<'_>) -> MatchResult {
    if !cursor.is_line_start() {
        return None;
    }
    let hashes = (0..MAX_HEADING_LEVEL)
        .take_while(|&i| cursor.peek(i) == Some(b'#'))
        .count();
    if hashes == 0 || cursor.peek(hashes) != Some(b' ') {
        return None;
    }
    let level = HeadingLevel::from(hashes as u8);
    let marker_end = cursor.position() + hashes + 1;
    Some(Match::line_prefixed(
        cursor,
        SpanKind::Heading(level),
        marker_end,
    ))
}

/// `- ` or `* ` at line start.
pub fn match_bullet_item(cursor: &Cursor<'_>, _closers: &mut CloserIndex<'_>) -> MatchResult {
    if !cursor.is_line_start() {
        return None;
    }
    match (cursor.peek(0)?, cursor.peek(1)?) {
        (b'-' | b'*', b' ') => Some(Match::line_prefixed(
            cursor,
            SpanKind::BulletItem,
            cursor.position() + 2,
        )),
        _ => None,
    }
}

/// One or more ASCII digits, `.`, then a space, at line start.
pub fn match_numbered_item(cursor: &Cursor<'_>, _closers: &mut CloserIndex<'_>) -> MatchResult {
    if !cursor.is_line_start() {
        return None;
    }
    let digits = (0..)
        .take_while(|&i| cursor.peek(i).is_some_and(|b| b.is_ascii_digit()))
        .count();
    if digits == 0 || cursor.peek(digits) != Some(b'.') || cursor.peek(digits + 1) != Some(b' ') {
        return None;
    }
    Some(Match::line_prefixed(
        cursor,
        SpanKind::NumberedItem,
        cursor.position() + digits + 2,
    ))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
