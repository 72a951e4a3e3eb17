//! Raw HTML passthrough (§4.3.7).
//!
//!     A self-closing `HtmlOpenTag` emits an empty `CustomHtml` directly. Otherwise
//!     the matching `HtmlCloseTag` is found by tracking a depth stack so that
//!     nested tags of the *same name* pair correctly (`<div><div>x</div></div>`
//!     doesn't close on the first `</div>`). No match before `EOF` is a hard
//!     `UnclosedHtmlTag` error (§7) — raw HTML passthrough is rare enough in
//!     practice that a malformed tag is more likely an authoring mistake than
//!     prose to preserve literally.

use super::{build, Ctx};
use crate::markweave::ast::Node;
use crate::markweave::error::ParseError;
use crate::markweave::span::Span;
use crate::markweave::token::{Attrs, SpannedToken, Token};

#[allow(clippy::too_many_arguments)]
pub(super) fn collect(
    name: String,
    attrs: Attrs,
    self_closing: bool,
    tokens: &[SpannedToken],
    ctx: &Ctx,
    depth: usize,
    open_span: Span,
) -> Result<(usize, Node), ParseError> {
    if self_closing {
        return Ok((0, Node::CustomHtml(name, attrs, Vec::new(), true)));
    }

    let mut open_depth = 0usize;
    let mut close_idx = None;
    for (idx, st) in tokens.iter().enumerate() {
        match &st.token {
            Token::HtmlOpenTag {
                name: n,
                self_closing: sc,
                ..
            } if !sc && n.eq_ignore_ascii_case(&name) => {
                open_depth += 1;
            }
            Token::HtmlCloseTag { name: n } if n.eq_ignore_ascii_case(&name) => {
                if open_depth == 0 {
                    close_idx = Some(idx);
                    break;
                }
                open_depth -= 1;
            }
            _ => {}
        }
    }

    let close_idx = close_idx.ok_or_else(|| ParseError::UnclosedHtmlTag {
        name: name.clone(),
        at: ctx.span_map.lookup(open_span),
    })?;

    let mut inner = &tokens[..close_idx];
    // An opening/closing tag that sits alone on its own line shouldn't leave a
    // stray `Text("\n")` as a child — trim one adjacent `Newline` on each side, so
    // `"<div>\n# Hi\n</div>\n"` yields `CustomHtml("div", [], [Heading(1, ..)])`
    // rather than `CustomHtml("div", [], [Text("\n"), Heading(1, ..), Text("\n")])`.
    if matches!(inner.first().map(|t| &t.token), Some(Token::Newline)) {
        inner = &inner[1..];
    }
    if matches!(inner.last().map(|t| &t.token), Some(Token::Newline)) {
        inner = &inner[..inner.len() - 1];
    }

    let children = build(inner, ctx, depth + 1)?;
    Ok((close_idx + 1, Node::CustomHtml(name, attrs, children, false)))
}
