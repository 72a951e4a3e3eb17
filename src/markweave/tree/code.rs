//! Inline and fenced code (§4.3.2).
//!
//!     Code contents are not recursively parsed as Markdown — delimiter-looking
//!     tokens inside a code span (e.g. a stray `*`) are flattened back to their
//!     literal text via [`super::token_literal`] rather than given emphasis
//!     meaning.

use super::flatten_text;
use crate::markweave::ast::Node;
use crate::markweave::token::{SpannedToken, Token};

/// `SingleGrave` collects until the next `SingleGrave`. Returns `None` if no
/// closing grave is found in this slice — the caller degrades the opener to
/// literal text per §7's `UnclosedDelimiter` policy.
pub(super) fn collect_inline(tokens: &[SpannedToken]) -> Option<(usize, Node)> {
    let j = tokens.iter().position(|t| matches!(t.token, Token::SingleGrave))?;
    let text = flatten_text(&tokens[..j]);
    Some((j + 1, Node::Code(vec![Node::Text(text)], None)))
}

/// `TripleGrave` collects until the next `TripleGrave`. An unterminated fence
/// (never closed before EOF) still produces a `MultilineCode` of everything that
/// follows — fenced code blocks are common enough at end-of-file that failing the
/// whole parse over a missing closing fence would be surprising.
///
/// The line break that ends the opening fence (`` ```rust\n ``) terminates the
/// fence marker, not the code — it's dropped from the body so `` ```rust\nx\n``` ``
/// yields the body `"x\n"` rather than `"\nx\n"`.
pub(super) fn collect_fenced(lang: Option<String>, tokens: &[SpannedToken]) -> (usize, Node) {
    let (skip, body) = match tokens.first() {
        Some(t) if matches!(t.token, Token::Newline) => (1, &tokens[1..]),
        _ => (0, tokens),
    };
    match body.iter().position(|t| matches!(t.token, Token::TripleGrave { .. })) {
        Some(j) => {
            let text = flatten_text(&body[..j]);
            (skip + j + 1, Node::MultilineCode(vec![Node::Text(text)], lang))
        }
        None => {
            let text = flatten_text(body);
            (skip + body.len(), Node::MultilineCode(vec![Node::Text(text)], lang))
        }
    }
}
