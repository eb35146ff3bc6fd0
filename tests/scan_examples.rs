//! End-to-end scanning behaviour on representative inputs.

use marklite::scanner::{scan, scan_with, HeadingLevel, ScanOptions, Span, SpanKind};

fn shape(spans: &[Span]) -> Vec<(SpanKind, &str)> {
    spans.iter().map(|s| (s.kind, s.text.as_str())).collect()
}

fn kinds(spans: &[Span]) -> Vec<SpanKind> {
    spans.iter().map(|s| s.kind).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Delimited Runs
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn bold_is_never_split_into_italics() {
    assert_eq!(
        shape(&scan("**x**")),
        vec![
            (SpanKind::SyntaxMarker, "**"),
            (SpanKind::Bold, "x"),
            (SpanKind::SyntaxMarker, "**"),
        ]
    );
}

#[test]
fn unmatched_star_stays_literal() {
    let spans = scan_with("*hello", &ScanOptions::per_character());
    assert_eq!(spans.len(), 6);
    assert!(spans.iter().all(|s| s.kind == SpanKind::Literal));

    assert_eq!(shape(&scan("*hello")), vec![(SpanKind::Literal, "*hello")]);
}

#[test]
fn mixed_single_and_double_underscores() {
    assert_eq!(
        shape(&scan("_a_ and __b__")),
        vec![
            (SpanKind::SyntaxMarker, "_"),
            (SpanKind::Italic, "a"),
            (SpanKind::SyntaxMarker, "_"),
            (SpanKind::Literal, " and "),
            (SpanKind::SyntaxMarker, "__"),
            (SpanKind::Bold, "b"),
            (SpanKind::SyntaxMarker, "__"),
        ]
    );
}

#[test]
fn mixed_delimiters_across_line_break() {
    assert_eq!(
        shape(&scan("_a_\n__b__")),
        vec![
            (SpanKind::SyntaxMarker, "_"),
            (SpanKind::Italic, "a"),
            (SpanKind::SyntaxMarker, "_"),
            (SpanKind::Literal, "\n"),
            (SpanKind::SyntaxMarker, "__"),
            (SpanKind::Bold, "b"),
            (SpanKind::SyntaxMarker, "__"),
        ]
    );
}

#[test]
fn strikethrough_between_text() {
    assert_eq!(
        kinds(&scan("a ~~b~~ c")),
        vec![
            SpanKind::Literal,
            SpanKind::SyntaxMarker,
            SpanKind::Strikethrough,
            SpanKind::SyntaxMarker,
            SpanKind::Literal,
        ]
    );
}

#[test]
fn empty_delimiter_pairs_are_literal() {
    for text in ["****", "____", "~~~~", "**", "__"] {
        assert_eq!(shape(&scan(text)), vec![(SpanKind::Literal, text)], "{:?}", text);
    }
}

#[test]
fn italic_ignores_bold_legs_inside() {
    assert_eq!(
        shape(&scan("*a **b** c*")),
        vec![
            (SpanKind::SyntaxMarker, "*"),
            (SpanKind::Italic, "a **b** c"),
            (SpanKind::SyntaxMarker, "*"),
        ]
    );
}

#[test]
fn delimited_runs_may_span_lines() {
    let spans = scan("**a\nb**");
    assert_eq!(spans[1].kind, SpanKind::Bold);
    assert_eq!(spans[1].text, "a\nb");
}

// ─────────────────────────────────────────────────────────────────────────────
// Line-Start Rules
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn heading_requires_trailing_space() {
    assert!(scan("#heading").iter().all(|s| s.kind == SpanKind::Literal));
    assert_eq!(
        shape(&scan("# heading")),
        vec![
            (SpanKind::SyntaxMarker, "# "),
            (SpanKind::Heading(HeadingLevel::H1), "heading"),
        ]
    );
}

#[test]
fn heading_levels_cap_at_six() {
    let spans = scan("###### six\n####### seven");
    assert_eq!(spans[1].kind, SpanKind::Heading(HeadingLevel::H6));
    assert_eq!(spans[1].text, "six");
    assert_eq!(
        shape(&spans[2..]),
        vec![
            (SpanKind::Literal, "\n"),
            (SpanKind::Literal, "####### seven"),
        ]
    );
}

#[test]
fn list_only_at_line_start() {
    assert!(scan("a- item").iter().all(|s| s.kind == SpanKind::Literal));
    assert_eq!(
        shape(&scan("a\n- item")),
        vec![
            (SpanKind::Literal, "a"),
            (SpanKind::Literal, "\n"),
            (SpanKind::SyntaxMarker, "- "),
            (SpanKind::BulletItem, "item"),
        ]
    );
}

#[test]
fn numbered_list_lines() {
    assert_eq!(
        shape(&scan("1. one\n10. ten")),
        vec![
            (SpanKind::SyntaxMarker, "1. "),
            (SpanKind::NumberedItem, "one"),
            (SpanKind::Literal, "\n"),
            (SpanKind::SyntaxMarker, "10. "),
            (SpanKind::NumberedItem, "ten"),
        ]
    );
}

#[test]
fn line_rules_keep_line_break_separate() {
    let spans = scan("# a\n");
    assert_eq!(spans.last().map(|s| (s.kind, s.text.as_str())), Some((SpanKind::Literal, "\n")));
    assert!(spans.iter().filter(|s| s.is_styled()).all(|s| !s.text.contains('\n')));
}

#[test]
fn carriage_return_is_content() {
    let spans = scan("# a\r\nb");
    assert_eq!(spans[1].text, "a\r");
}

#[test]
fn empty_list_item_at_end_of_buffer() {
    assert_eq!(
        shape(&scan("- ")),
        vec![(SpanKind::SyntaxMarker, "- "), (SpanKind::BulletItem, "")]
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Whole-Buffer Properties
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_buffer_yields_no_spans() {
    assert!(scan("").is_empty());
}

#[test]
fn document_round_trips() {
    let text = "# Notes\n\nSome **bold**, *italic* and ~~gone~~ text.\n\
                - first\n* second\n1. third\n\n_end_ 日本語 🎉";
    let spans = scan(text);
    let rebuilt: String = spans.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(rebuilt, text);

    let mut offset = 0;
    for span in &spans {
        assert_eq!(span.start, offset);
        assert!(text.is_char_boundary(span.end));
        offset = span.end;
    }
    assert_eq!(offset, text.len());
}

#[test]
fn repeated_scans_are_identical() {
    let text = "**a** _b_ ~~c~~\n## d";
    assert_eq!(scan(text), scan(text));
}

#[test]
fn coalescing_does_not_move_styled_spans() {
    let text = "x **y** z\n- w";
    let styled = |spans: Vec<Span>| -> Vec<Span> {
        spans.into_iter().filter(|s| s.kind != SpanKind::Literal).collect()
    };
    assert_eq!(
        styled(scan(text)),
        styled(scan_with(text, &ScanOptions::per_character()))
    );
}
