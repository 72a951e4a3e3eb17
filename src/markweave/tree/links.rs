//! Link/image collection (§4.3.3).
//!
//!     On `LinkStart`/`ImageStart`, collect tokens up to `LinkEnd`. The first
//!     `LinkUri` within the run is the URI (or `None` if absent). Tokens before
//!     `LinkInterstice` form the description — parsed recursively for `Link`, or
//!     flattened to plain text for `Image`'s alt text.

use super::{build_raw, flatten_text, Ctx};
use crate::markweave::ast::Node;
use crate::markweave::error::ParseError;
use crate::markweave::token::{SpannedToken, Token};

/// Opens on a `LinkStart`/`ImageStart`. Returns the literal opener text if no
/// `LinkEnd` closes it in this slice — an unpaired link/image opener degrades to
/// plain text per §7's `UnclosedDelimiter` policy, the same choice made for
/// emphasis and code delimiters.
pub(super) fn collect(is_image: bool, tokens: &[SpannedToken], ctx: &Ctx, depth: usize) -> Result<(usize, Node), ParseError> {
    let end = match tokens.iter().position(|t| matches!(t.token, Token::LinkEnd)) {
        Some(end) => end,
        None => {
            let literal = if is_image { "![" } else { "[" };
            return Ok((0, Node::Text(literal.to_string())));
        }
    };

    let run = &tokens[..end];
    let interstice = run.iter().position(|t| matches!(t.token, Token::LinkInterstice));
    let desc_tokens = match interstice {
        Some(p) => &run[..p],
        None => run,
    };
    let uri = run.iter().find_map(|t| match &t.token {
        Token::LinkUri(u) => Some(u.clone()),
        _ => None,
    });

    let node = if is_image {
        Node::Image(flatten_text(desc_tokens), uri)
    } else {
        let children = build_raw(desc_tokens, ctx, depth + 1)?;
        Node::Link(children, uri)
    };
    Ok((end + 1, node))
}
