//! # markweave
//!
//!     A Markdown-to-structured-document compiler. Turns a Markdown source string
//!     into a tree of semantic document nodes suitable for rendering to HTML.
//!
//! Pipeline
//!
//!     The crate is a two-stage pipeline, data flowing strictly forward:
//!
//!         String -> [Token] -> [Node] -> HTML
//!
//!     1. **Tokenizer** ([markweave::tokenizer]) - context-sensitive lexing, producing
//!        a flat stream of tagged tokens with source spans.
//!     2. **TreeBuilder** ([markweave::tree]) - consumes the token stream and produces
//!        a tree of document nodes (headings, paragraphs, lists, quotes, emphasis,
//!        links, images, fenced code, raw HTML, etc).
//!     3. **Renderer** ([markweave::render]) - walks the tree and emits HTML.
//!
//!     There is no back-edge between stages; the only shared read-only dependency is
//!     the [`SpanMap`](markweave::span::SpanMap), built once by the tokenizer and
//!     borrowed by the tree builder and diagnostics.
//!
//! Dialect notes
//!
//!     This is a pragmatic dialect close to, but not identical to, CommonMark:
//!
//!     - `TripleUnderscore` (`___`) on a line by itself produces an inline line break,
//!       not a horizontal rule (CommonMark treats `___` as a thematic break). Kept
//!       intentionally; see [tree::rules].
//!     - A `***bold and italic***` run with no closing `*`/`**` before the next block
//!       boundary wraps the remainder in `Bold(Italic(..))` rather than erroring; see
//!       [tree::emphasis].
//!     - Images render without a `src` attribute in this dialect (see [render]).
//!
//! Getting started
//!
//!     - [`parse`] is the convenience entry point: tokenize then build.
//!     - [`tokenize`] exposes the token stream directly, e.g. for diagnostics tooling.
//!     - [`render_html`] walks a parsed tree back out to HTML.
#![allow(rustdoc::invalid_html_tags)]

pub mod markweave;

pub use markweave::ast::Node;
pub use markweave::config::ParseOptions;
pub use markweave::error::{Diagnostic, ParseError};
pub use markweave::render::render_html;
pub use markweave::span::{LineCol, Span, SpanMap};
pub use markweave::token::Token;
pub use markweave::tokenizer::tokenize;
pub use markweave::tree::parse_tokens;

/// Tokenizes `source` and builds the document tree in one pass, using default
/// [`ParseOptions`].
///
/// This is the convenience wrapper described in the public API: `tokenize` then
/// `parse_tokens`.
pub fn parse(source: &str) -> Result<Vec<Node>, ParseError> {
    parse_with(source, &ParseOptions::default())
}

/// Like [`parse`], but with explicit [`ParseOptions`].
pub fn parse_with(source: &str, options: &ParseOptions) -> Result<Vec<Node>, ParseError> {
    let body = if options.strip_frontmatter {
        markweave::tokenizer::frontmatter::strip(source)
    } else {
        source
    };
    let (tokens, span_map) = tokenize(body)?;
    parse_tokens(&tokens, &span_map, options)
}
