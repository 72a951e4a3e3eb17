//! Heading collection (§4.3.4).

use super::{build_raw, trim_marker_separator, Ctx};
use crate::markweave::ast::Node;
use crate::markweave::error::ParseError;
use crate::markweave::token::{SpannedToken, Token};

/// `Heading(n)` collects tokens up to (and including) the next `Newline`; the
/// newline itself is consumed here so the outer loop does not also count it toward
/// a blank-line boundary. The mandatory space between the `#` run and the heading
/// text is stripped, mirroring [`super::code::collect_fenced`]'s drop of the
/// newline right after an opening fence.
pub(super) fn collect(level: u8, tokens: &[SpannedToken], ctx: &Ctx, depth: usize) -> Result<(usize, Node), ParseError> {
    let end = tokens
        .iter()
        .position(|t| matches!(t.token, Token::Newline | Token::Eof))
        .unwrap_or(tokens.len());
    let mut inner = build_raw(&tokens[..end], ctx, depth + 1)?;
    trim_marker_separator(&mut inner);
    let consumed = if matches!(tokens.get(end).map(|t| &t.token), Some(Token::Newline)) {
        end + 1
    } else {
        end
    };
    Ok((consumed, Node::Heading(level, inner)))
}
