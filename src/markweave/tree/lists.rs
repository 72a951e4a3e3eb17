//! List and quote nesting (§4.3.5).
//!
//!     For each `UListItem`/`OListItem`/`BlockQuote` token, [`collect`] gathers
//!     every sibling item that shares its family (list-vs-list-vs-quote) and
//!     level, recursing on each item's own token slice. A *deeper*-level item
//!     token never ends the current item's slice (§4.3.5 step 1's "level ≤
//!     current.level" test only fires on same-or-shallower items), so it rides
//!     along inside that slice and becomes a nested `UList`/`OList`/`Quote` when
//!     the recursive [`super::build_raw`] call reaches it — no separate "current
//!     list" field needs to be threaded between calls to get nesting right.
//!
//!     `UList`/`OList` items are wrapped in `Node::ListItem` unconditionally. Quote
//!     items are wrapped in `Node::Paragraph` too, per §4.3.5's "(or as Paragraph
//!     content for Quote)" — except a quote item whose own source line was never
//!     closed by a newline (the trailing fragment of a document with no final line
//!     break) is pushed bare, unwrapped. §8 Scenario 5 documents this: `"> f\n>> g\n
//!     >>> h\n>> i"`'s last item (`i`, which runs straight into EOF) is bare
//!     `Text("i")`, not `Paragraph([Text("i")])`, while every other item in the same
//!     example — each of which closed its line with `\n` — is Paragraph-wrapped.
//!     [`wrap_item`] decides this from whether the item's own raw token slice (before
//!     [`super::build_raw`] runs on it) contains a `Newline` at all. Both item kinds
//!     use `build_raw`, not `build` — an item's content is exactly what the slice
//!     parses to, with no extra blank-line-triggered paragraph wrapping layered on
//!     top of the wrapper this module already applies.

use super::{build_raw, trim_marker_separator, trim_trailing_line_whitespace, Ctx};
use crate::markweave::ast::Node;
use crate::markweave::error::ParseError;
use crate::markweave::token::{SpannedToken, Token};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Family {
    UList,
    OList,
    Quote,
}

fn family_and_level(token: &Token) -> Option<(Family, usize)> {
    match token {
        Token::UListItem { level } => Some((Family::UList, *level)),
        Token::OListItem { level } => Some((Family::OList, *level)),
        Token::BlockQuote { level } => Some((Family::Quote, *level)),
        _ => None,
    }
}

/// Entry point called from the main dispatch when it sees a fresh list/quote item
/// token at `tokens[start]`. Returns the number of tokens consumed (relative to
/// `start`) and the constructed `UList`/`OList`/`Quote` node.
pub(super) fn collect(tokens: &[SpannedToken], start: usize, ctx: &Ctx, depth: usize) -> Result<(usize, Node), ParseError> {
    let (family, level) = family_and_level(&tokens[start].token).expect("lists::collect called on a non-list token");

    let mut items = Vec::new();
    let mut i = start;
    loop {
        let (slice, next_i) = collect_item_slice(tokens, i + 1, level);
        let line_closed = slice.iter().any(|t| matches!(t.token, Token::Newline));
        let mut item_content = build_raw(slice, ctx, depth + 1)?;
        trim_marker_separator(&mut item_content);
        trim_trailing_line_whitespace(&mut item_content);
        items.push(wrap_item(family, item_content, line_closed));
        i = next_i;

        match tokens.get(i).and_then(|t| family_and_level(&t.token)) {
            Some((f, l)) if f == family && l == level => continue,
            _ => break,
        }
    }

    let node = match family {
        Family::UList => Node::UList(items, level),
        Family::OList => Node::OList(items, level),
        Family::Quote => Node::Quote(items, level),
    };
    Ok((i - start, node))
}

/// `line_closed` is whether the item's own raw slice contained a `Newline` before
/// this function ever saw it — see the module doc comment. A quote item whose line
/// never closed and whose content is a single node is left bare; every other case
/// still gets the `Paragraph` wrapper.
fn wrap_item(family: Family, content: Vec<Node>, line_closed: bool) -> Node {
    match family {
        Family::UList | Family::OList => Node::ListItem(content),
        Family::Quote if !line_closed && content.len() == 1 => content.into_iter().next().unwrap(),
        Family::Quote => Node::Paragraph(content),
    }
}

/// `collectListTokensTillNextItemOnLevel`: advances from `start`, taking tokens
/// while (a) we have not seen two consecutive `Newline`/`Eof` and (b) the next
/// token is not a list/quote item (of *any* family) at a level `<= level`.
/// Returns `(slice, next_index)` where `next_index` points just past any
/// newlines greedily consumed after the slice (§4.3.5 step 2).
fn collect_item_slice(tokens: &[SpannedToken], start: usize, level: usize) -> (&[SpannedToken], usize) {
    let mut i = start;
    let mut prev_was_newline = false;
    loop {
        match tokens.get(i).map(|t| &t.token) {
            None | Some(Token::Eof) => break,
            Some(Token::Newline) => {
                if prev_was_newline {
                    break;
                }
                prev_was_newline = true;
                i += 1;
            }
            Some(tok) => {
                if let Some((_, lvl)) = family_and_level(tok) {
                    if lvl <= level {
                        break;
                    }
                }
                prev_was_newline = false;
                i += 1;
            }
        }
    }
    let slice_end = i;
    while matches!(tokens.get(i).map(|t| &t.token), Some(Token::Newline)) {
        i += 1;
    }
    (&tokens[start..slice_end], i)
}
