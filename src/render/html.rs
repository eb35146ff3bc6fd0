//! HTML rendering of scanned spans
//!
//! Styled spans and syntax markers become `<span class="...">` elements using
//! the class names from [`SpanKind::css_class`]; literal text is written
//! escaped with no wrapper. Markers stay visible (de-emphasized by CSS) so
//! the rendered output still reads as the markdown the user typed.

use crate::scanner::Span;

/// Generator name written into standalone documents.
const GENERATOR: &str = "marklite";

// ─────────────────────────────────────────────────────────────────────────────
// HTML Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Render spans as an HTML fragment.
pub fn render_fragment(spans: &[Span]) -> String {
    let mut html = String::with_capacity(spans.iter().map(|s| s.text.len() + 8).sum());
    for span in spans {
        match span.kind.css_class() {
            Some(class) => {
                html.push_str("<span class=\"");
                html.push_str(&class);
                html.push_str("\">");
                html.push_str(&html_escape(&span.text));
                html.push_str("</span>");
            }
            None => html.push_str(&html_escape(&span.text)),
        }
    }
    html
}

/// Render spans as a complete HTML document with inlined CSS.
pub fn render_document(spans: &[Span], title: Option<&str>) -> String {
    let doc_title = title.unwrap_or("Untitled");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="generator" content="{generator}">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
<pre class="markdown-editor">{body}</pre>
</body>
</html>
"#,
        generator = GENERATOR,
        title = html_escape(doc_title),
        css = BASE_CSS,
        body = render_fragment(spans),
    )
}

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Styles for the span classes.
const BASE_CSS: &str = r#"
body {
    margin: 0;
    padding: 32px 24px;
    background-color: #ffffff;
    color: #24292f;
}

.markdown-editor {
    max-width: 900px;
    margin: 0 auto;
    font-family: 'JetBrains Mono', 'Fira Code', 'Consolas', monospace;
    font-size: 15px;
    line-height: 1.6;
    white-space: pre-wrap;
    word-wrap: break-word;
}

/* Delimiters stay visible but recede */
.markdown-syntax {
    color: #8c959f;
}

.markdown-bold {
    font-weight: 700;
}

.markdown-italic {
    font-style: italic;
}

.markdown-strikethrough {
    text-decoration: line-through;
}

.markdown-heading {
    font-weight: 600;
    color: #0550ae;
}

.markdown-h1 { font-size: 1.8em; }
.markdown-h2 { font-size: 1.5em; }
.markdown-h3 { font-size: 1.25em; }
.markdown-h4 { font-size: 1.1em; }
.markdown-h5 { font-size: 1em; }
.markdown-h6 { font-size: 0.9em; color: #57606a; }

.markdown-list-item {
    color: #24292f;
}
"#;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(html_escape(r#"say "hi" 'x'"#), "say &quot;hi&quot; &#39;x&#39;");
    }

    #[test]
    fn test_fragment_bold() {
        let html = render_fragment(&scan("a **b**"));
        assert_eq!(
            html,
            "a <span class=\"markdown-syntax\">**</span>\
             <span class=\"markdown-bold\">b</span>\
             <span class=\"markdown-syntax\">**</span>"
        );
    }

    #[test]
    fn test_fragment_heading_class() {
        let html = render_fragment(&scan("### Three"));
        assert!(html.contains("<span class=\"markdown-syntax\">### </span>"));
        assert!(html.contains("<span class=\"markdown-heading markdown-h3\">Three</span>"));
    }

    #[test]
    fn test_fragment_escapes_content() {
        let html = render_fragment(&scan("*<b>*"));
        assert!(html.contains("<span class=\"markdown-italic\">&lt;b&gt;</span>"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_fragment_keeps_line_breaks() {
        let html = render_fragment(&scan("- a\n- b"));
        assert_eq!(html.matches('\n').count(), 1);
        assert_eq!(html.matches("markdown-list-item").count(), 2);
    }

    #[test]
    fn test_empty_fragment() {
        assert_eq!(render_fragment(&[]), "");
    }

    #[test]
    fn test_document_structure() {
        let html = render_document(&scan("# Hi"), Some("A & B"));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains(".markdown-syntax"));
        assert!(html.contains("<pre class=\"markdown-editor\">"));
        assert!(html.contains("markdown-h1"));
    }

    #[test]
    fn test_document_default_title() {
        let html = render_document(&[], None);
        assert!(html.contains("<title>Untitled</title>"));
    }
}
