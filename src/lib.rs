//! marklite - inline markdown syntax scanning for live-highlighting editors
//!
//! The heart of the crate is [`scanner::scan`], a pure function that turns
//! text into an ordered, gap-free list of classified spans. Around it sit the
//! pieces a host needs: a text unit that rescans on every change
//! ([`document`]), a replaceable presentation layer ([`render`]), and the
//! settings and input handling used by the `marklite` command-line tool.
//!
//! # Example
//! ```
//! use marklite::scanner::{scan, HeadingLevel, SpanKind};
//!
//! let spans = scan("# Title");
//! assert_eq!(spans[0].text, "# ");
//! assert_eq!(spans[1].kind, SpanKind::Heading(HeadingLevel::H1));
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod input;
pub mod render;
pub mod scanner;
pub mod string_utils;

pub use document::MarkdownText;
pub use error::{Error, Result};
pub use scanner::{scan, scan_with, HeadingLevel, ScanOptions, Span, SpanKind};
