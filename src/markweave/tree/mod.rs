//! The tree builder (§4.3).
//!
//!     Consumes the flat token stream produced by [`crate::markweave::tokenizer`] and
//!     produces a tree of [`Node`]s in a single left-to-right pass. Delimiter pairing
//!     (emphasis, code, links), list/quote nesting, and raw HTML/script passthrough
//!     are each handled by a dedicated submodule; [`build_raw`] is the shared
//!     recursive entry point they call back into for their inner token slices.
//!
//!     Recursion depth is tracked explicitly via [`Ctx`]/`depth` rather than relying
//!     on the native call stack alone, so pathological nesting surfaces as
//!     [`ParseError::NestingTooDeep`] instead of a stack overflow (§5).

pub mod code;
pub mod emphasis;
pub mod heading;
pub mod html;
pub mod links;
pub mod lists;
mod paragraphs;
mod rules;

use crate::markweave::ast::Node;
use crate::markweave::config::ParseOptions;
use crate::markweave::error::ParseError;
use crate::markweave::span::SpanMap;
use crate::markweave::token::{Attrs, SpannedToken, Token};

pub(crate) struct Ctx<'a> {
    pub span_map: &'a SpanMap,
    pub options: &'a ParseOptions,
}

/// `parse_tokens(tokens, span_map) -> [Node]` (§6.1), with [`ParseOptions`] threaded
/// through for the recursion-depth bound.
pub fn parse_tokens(
    tokens: &[SpannedToken],
    span_map: &SpanMap,
    options: &ParseOptions,
) -> Result<Vec<Node>, ParseError> {
    let ctx = Ctx { span_map, options };
    build(tokens, &ctx, 0)
}

/// Builds a node list and, at the end, wraps any trailing run of inline nodes left
/// over (never consumed by a blank-line boundary) into a final `Paragraph` — the
/// same rule §4.3.6 applies mid-stream, just applied once more at the end of input.
pub(crate) fn build(tokens: &[SpannedToken], ctx: &Ctx, depth: usize) -> Result<Vec<Node>, ParseError> {
    let mut out = build_raw(tokens, ctx, depth)?;
    paragraphs::finish(&mut out);
    Ok(out)
}

/// The main dispatch loop (§4.3), without the trailing paragraph-wrap `build`
/// applies. Used directly wherever the surrounding construct already supplies its
/// own wrapper for trailing inline content — emphasis, links, and headings hold
/// inline children directly (not a nested `Paragraph`), and list items/quote
/// paragraphs are wrapped explicitly by [`lists`].
pub(crate) fn build_raw(tokens: &[SpannedToken], ctx: &Ctx, depth: usize) -> Result<Vec<Node>, ParseError> {
    if depth > ctx.options.max_nesting_depth {
        let at = tokens.first().and_then(|t| ctx.span_map.lookup(t.span));
        return Err(ParseError::NestingTooDeep { at, depth });
    }

    let mut out: Vec<Node> = Vec::new();
    let mut i = 0usize;
    while i < tokens.len() {
        let st = &tokens[i];
        match &st.token {
            Token::Eof => break,

            Token::Text(s) => {
                push_text(&mut out, s);
                i += 1;
            }
            Token::Escape(c) => {
                push_text(&mut out, &c.to_string());
                i += 1;
            }
            Token::LineBreak => {
                out.push(Node::InlineLineBreak);
                i += 1;
            }
            Token::TripleUnderscore => {
                out.push(rules::inline_line_break());
                i += 1;
            }
            Token::TripleHyphen | Token::TripleEquals => {
                out.push(rules::horizontal_rule());
                i += 1;
            }

            Token::Newline => {
                i += 1;
                if matches!(tokens.get(i).map(|t| &t.token), Some(Token::Newline)) {
                    paragraphs::infer(&mut out);
                    while matches!(tokens.get(i).map(|t| &t.token), Some(Token::Newline)) {
                        i += 1;
                    }
                } else {
                    push_text(&mut out, "\n");
                }
            }

            Token::Heading(n) => {
                let (consumed, node) = heading::collect(*n, &tokens[i + 1..], ctx, depth)?;
                out.push(node);
                i += 1 + consumed;
            }

            Token::SingleGrave => match code::collect_inline(&tokens[i + 1..]) {
                Some((consumed, node)) => {
                    out.push(node);
                    i += 1 + consumed;
                }
                None => {
                    push_text(&mut out, "`");
                    i += 1;
                }
            },
            Token::TripleGrave { lang } => {
                let (consumed, node) = code::collect_fenced(lang.clone(), &tokens[i + 1..]);
                out.push(node);
                i += 1 + consumed;
            }

            Token::UListItem { .. } | Token::OListItem { .. } | Token::BlockQuote { .. } => {
                drop_trailing_blank_text(&mut out);
                let (consumed, node) = lists::collect(tokens, i, ctx, depth)?;
                out.push(node);
                i += consumed;
            }

            Token::SingleAsterisk | Token::SingleUnderscore => {
                let (consumed, nodes) = emphasis::open_italic(&st.token, &tokens[i + 1..], ctx, depth)?;
                for n in nodes {
                    push_node(&mut out, n);
                }
                i += 1 + consumed;
            }
            Token::DoubleAsterisk => {
                let (consumed, nodes) = emphasis::open_bold(&tokens[i + 1..], ctx, depth)?;
                for n in nodes {
                    push_node(&mut out, n);
                }
                i += 1 + consumed;
            }
            Token::TripleAsterisk => {
                let (consumed, nodes) = emphasis::open_triple(&tokens[i + 1..], ctx, depth)?;
                for n in nodes {
                    push_node(&mut out, n);
                }
                i += 1 + consumed;
            }
            Token::DoubleTilde => {
                let (consumed, nodes) = emphasis::open_strikethrough(&tokens[i + 1..], ctx, depth)?;
                for n in nodes {
                    push_node(&mut out, n);
                }
                i += 1 + consumed;
            }
            Token::DoubleUnderscore => {
                let (consumed, nodes) = emphasis::open_underline(&tokens[i + 1..], ctx, depth)?;
                for n in nodes {
                    push_node(&mut out, n);
                }
                i += 1 + consumed;
            }

            Token::LinkStart | Token::ImageStart => {
                let is_image = matches!(st.token, Token::ImageStart);
                let (consumed, node) = links::collect(is_image, &tokens[i + 1..], ctx, depth)?;
                push_node(&mut out, node);
                i += 1 + consumed;
            }

            Token::HtmlOpenTag {
                name,
                attrs,
                self_closing,
            } => {
                let (consumed, node) = html::collect(
                    name.clone(),
                    attrs.clone(),
                    *self_closing,
                    &tokens[i + 1..],
                    ctx,
                    depth,
                    st.span,
                )?;
                out.push(node);
                i += 1 + consumed;
            }
            Token::ScriptTag { body, attrs } => {
                out.push(Node::CustomScript(body.clone(), attrs.clone()));
                i += 1;
            }

            // No token in §3.2's table maps to footnote nodes in §3.3's `Node` grammar
            // — flattened to their literal source form rather than dropped silently.
            Token::FootnoteRef(r) => {
                push_text(&mut out, &format!("[^{r}]"));
                i += 1;
            }
            Token::FootnoteDef(r) => {
                push_text(&mut out, &format!("[^{r}]:"));
                i += 1;
            }

            // Reachable only if a `LinkStart`/`ImageStart` or `HtmlOpenTag` handler
            // above failed to consume its own closing delimiter — i.e. a tokenizer/
            // tree-builder mismatch, not a user-triggerable parse outcome.
            Token::LinkEnd | Token::LinkInterstice | Token::LinkUri(_) | Token::HtmlCloseTag { .. } => {
                unreachable!("stray structural token reached the top-level dispatch: {:?}", st.token);
            }
        }
    }
    Ok(out)
}

fn push_text(out: &mut Vec<Node>, s: &str) {
    if s.is_empty() {
        return;
    }
    if let Some(Node::Text(prev)) = out.last_mut() {
        prev.push_str(s);
    } else {
        out.push(Node::Text(s.to_string()));
    }
}

/// Pushes a node produced by a sub-builder, applying the same text-merge rule as
/// [`push_text`] when it happens to be plain text (e.g. an unclosed delimiter
/// degrading to its literal form, per §7's `UnclosedDelimiter` policy).
fn push_node(out: &mut Vec<Node>, node: Node) {
    if let Node::Text(s) = &node {
        push_text(out, s);
    } else {
        out.push(node);
    }
}

/// §4.3.9: "blank text immediately before a list-item token is dropped".
fn drop_trailing_blank_text(out: &mut Vec<Node>) {
    if let Some(Node::Text(s)) = out.last() {
        if s.chars().all(|c| c == ' ' || c == '\t' || c == '\n') {
            out.pop();
        }
    }
}

/// Strips the one mandatory whitespace character that separates a block marker
/// (`#`, `-`, `1.`, `>`) from its content, mirroring [`code::collect_fenced`]'s
/// drop of the newline right after an opening code fence. Used by [`heading`]
/// and [`lists`] on the node list they are about to wrap; a leading `Text` that
/// becomes empty is removed outright.
pub(crate) fn trim_marker_separator(nodes: &mut Vec<Node>) {
    if let Some(Node::Text(s)) = nodes.first_mut() {
        if let Some(c) = s.chars().next() {
            if c == ' ' || c == '\t' {
                s.drain(..c.len_utf8());
            }
        }
        if s.is_empty() {
            nodes.remove(0);
        }
    }
}

/// Strips trailing line whitespace (spaces, tabs, the line's own newline) from a
/// `Text` node that sits right before a block-level sibling or at the end of the
/// list — the token stream keeps that whitespace to find the next marker, but it
/// is not part of the item's content. Inline siblings are left untouched, since
/// the whitespace there is meaningful (e.g. a space before `**bold**`).
pub(crate) fn trim_trailing_line_whitespace(nodes: &mut Vec<Node>) {
    for i in 0..nodes.len() {
        let at_boundary = match nodes.get(i + 1) {
            None => true,
            Some(n) => !n.is_inline(),
        };
        if at_boundary {
            if let Node::Text(s) = &mut nodes[i] {
                let trimmed_len = s.trim_end_matches(|c: char| c == ' ' || c == '\t' || c == '\n').len();
                s.truncate(trimmed_len);
            }
        }
    }
    nodes.retain(|n| !matches!(n, Node::Text(s) if s.is_empty()));
}

/// Reconstructs a token's canonical Markdown source form. Used by [`code`] to
/// flatten the contents of inline/fenced code spans (which are not recursively
/// parsed as Markdown) and by [`links`] to flatten an image's alt text.
pub(crate) fn token_literal(token: &Token) -> String {
    match token {
        Token::Text(s) => s.clone(),
        Token::Newline => "\n".to_string(),
        Token::LineBreak => "\\\n".to_string(),
        Token::Escape(c) => format!("\\{c}"),
        Token::Heading(n) => "#".repeat(*n as usize),
        Token::SingleAsterisk => "*".to_string(),
        Token::DoubleAsterisk => "**".to_string(),
        Token::TripleAsterisk => "***".to_string(),
        Token::DoubleTilde => "~~".to_string(),
        Token::DoubleUnderscore => "__".to_string(),
        Token::SingleGrave => "`".to_string(),
        Token::TripleGrave { lang } => format!("```{}", lang.clone().unwrap_or_default()),
        Token::SingleUnderscore => "_".to_string(),
        Token::TripleHyphen => "---".to_string(),
        Token::TripleEquals => "===".to_string(),
        Token::TripleUnderscore => "___".to_string(),
        Token::UListItem { .. } => "-".to_string(),
        Token::OListItem { .. } => "1.".to_string(),
        Token::BlockQuote { level } => ">".repeat(*level),
        Token::HtmlOpenTag {
            name,
            attrs,
            self_closing,
        } => render_tag(name, attrs, *self_closing),
        Token::HtmlCloseTag { name } => format!("</{name}>"),
        Token::ScriptTag { body, attrs } => format!("<script{}>{}</script>", render_attrs(attrs), body),
        Token::LinkStart => "[".to_string(),
        Token::ImageStart => "![".to_string(),
        Token::LinkInterstice => "](".to_string(),
        Token::LinkUri(u) => u.clone(),
        Token::LinkEnd => ")".to_string(),
        Token::FootnoteRef(r) => format!("[^{r}]"),
        Token::FootnoteDef(r) => format!("[^{r}]:"),
        Token::Eof => String::new(),
    }
}

fn render_tag(name: &str, attrs: &Attrs, self_closing: bool) -> String {
    format!("<{name}{}{}>", render_attrs(attrs), if self_closing { " /" } else { "" })
}

fn render_attrs(attrs: &Attrs) -> String {
    let mut s = String::new();
    for (k, v) in attrs {
        s.push(' ');
        s.push_str(k);
        if let Some(v) = v {
            s.push_str("=\"");
            s.push_str(v);
            s.push('"');
        }
    }
    s
}

/// Flattens a token slice to its literal text, for contexts that do not recurse
/// into Markdown structure (code spans, image alt text).
pub(crate) fn flatten_text(tokens: &[SpannedToken]) -> String {
    tokens.iter().map(|t| token_literal(&t.token)).collect()
}
