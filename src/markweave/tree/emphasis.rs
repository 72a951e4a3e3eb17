//! Asterisk/underscore resolution (§4.3.1).
//!
//!     `SingleAsterisk`/`SingleUnderscore` open italic, `DoubleAsterisk` opens bold,
//!     `DoubleTilde` opens strikethrough, `DoubleUnderscore` opens underline.
//!     Closing is "next matching delimiter
//!     token in this slice"; an unpaired opener degrades to its literal text per
//!     the `UnclosedDelimiter` policy in §7 ("degrade" over "error", since a stray
//!     `*` in prose is common and shouldn't fail the parse).
//!
//!     `TripleAsterisk` is the one genuinely ambiguous case (§4.3.1, Open Question
//!     1): it is simultaneously a bold-open and an italic-open. [`open_triple`]
//!     looks ahead for whichever of `*`/`**`/`***` appears first to decide which
//!     wraps which; an exact `***` close nests `Bold(Italic(...))` directly, a `**`
//!     close nests italic-outer/bold-inner, a `*` close nests bold-outer/italic-
//!     inner, and — preserving the documented pathological behavior rather than
//!     silently fixing it — no close at all wraps the entire remaining slice as
//!     `Bold(Italic(...))`.

use super::{build_raw, Ctx};
use crate::markweave::ast::Node;
use crate::markweave::error::ParseError;
use crate::markweave::token::{SpannedToken, Token};

fn opener_literal(token: &Token) -> &'static str {
    match token {
        Token::SingleUnderscore => "_",
        _ => "*",
    }
}

/// Opens italic on a `SingleAsterisk`/`SingleUnderscore`. Closes on the next
/// `SingleAsterisk` or `SingleUnderscore`, whichever comes first — the two close
/// each other interchangeably, per §4.3.1's literal wording. A `TripleAsterisk`
/// encountered before either is treated as an italic-close plus a synthesized
/// bold-open continuing immediately after it.
pub(super) fn open_italic(
    opener: &Token,
    tokens: &[SpannedToken],
    ctx: &Ctx,
    depth: usize,
) -> Result<(usize, Vec<Node>), ParseError> {
    let single = tokens
        .iter()
        .position(|t| matches!(t.token, Token::SingleAsterisk | Token::SingleUnderscore));
    let triple = tokens.iter().position(|t| matches!(t.token, Token::TripleAsterisk));

    match (single, triple) {
        (Some(s), Some(t)) if t < s => triple_splits_italic(tokens, t, ctx, depth),
        (None, Some(t)) => triple_splits_italic(tokens, t, ctx, depth),
        (Some(s), _) => {
            let inner = build_raw(&tokens[..s], ctx, depth + 1)?;
            Ok((s + 1, vec![Node::Italic(inner)]))
        }
        (None, None) => Ok((0, vec![Node::Text(opener_literal(opener).to_string())])),
    }
}

fn triple_splits_italic(
    tokens: &[SpannedToken],
    t: usize,
    ctx: &Ctx,
    depth: usize,
) -> Result<(usize, Vec<Node>), ParseError> {
    let inner = build_raw(&tokens[..t], ctx, depth + 1)?;
    let (consumed_after, trailing) = open_bold(&tokens[t + 1..], ctx, depth)?;
    let mut nodes = vec![Node::Italic(inner)];
    nodes.extend(trailing);
    Ok((t + 1 + consumed_after, nodes))
}

/// Opens bold on a `DoubleAsterisk`. Closes on the next `DoubleAsterisk`. A
/// `TripleAsterisk` encountered first is a bold-close plus a synthesized
/// italic-open continuing after it.
pub(super) fn open_bold(tokens: &[SpannedToken], ctx: &Ctx, depth: usize) -> Result<(usize, Vec<Node>), ParseError> {
    let double = tokens.iter().position(|t| matches!(t.token, Token::DoubleAsterisk));
    let triple = tokens.iter().position(|t| matches!(t.token, Token::TripleAsterisk));

    match (double, triple) {
        (Some(d), Some(t)) if t < d => triple_splits_bold(tokens, t, ctx, depth),
        (None, Some(t)) => triple_splits_bold(tokens, t, ctx, depth),
        (Some(d), _) => {
            let inner = build_raw(&tokens[..d], ctx, depth + 1)?;
            Ok((d + 1, vec![Node::Bold(inner)]))
        }
        (None, None) => Ok((0, vec![Node::Text("**".to_string())])),
    }
}

fn triple_splits_bold(tokens: &[SpannedToken], t: usize, ctx: &Ctx, depth: usize) -> Result<(usize, Vec<Node>), ParseError> {
    let inner = build_raw(&tokens[..t], ctx, depth + 1)?;
    let (consumed_after, trailing) = open_italic(&Token::SingleAsterisk, &tokens[t + 1..], ctx, depth)?;
    let mut nodes = vec![Node::Bold(inner)];
    nodes.extend(trailing);
    Ok((t + 1 + consumed_after, nodes))
}

/// Opens strikethrough on a `DoubleTilde`. Closes on the next `DoubleTilde`.
pub(super) fn open_strikethrough(
    tokens: &[SpannedToken],
    ctx: &Ctx,
    depth: usize,
) -> Result<(usize, Vec<Node>), ParseError> {
    match tokens.iter().position(|t| matches!(t.token, Token::DoubleTilde)) {
        Some(j) => {
            let inner = build_raw(&tokens[..j], ctx, depth + 1)?;
            Ok((j + 1, vec![Node::Strikethrough(inner)]))
        }
        None => Ok((0, vec![Node::Text("~~".to_string())])),
    }
}

/// Opens underline on a `DoubleUnderscore`. Closes on the next `DoubleUnderscore`.
pub(super) fn open_underline(tokens: &[SpannedToken], ctx: &Ctx, depth: usize) -> Result<(usize, Vec<Node>), ParseError> {
    match tokens.iter().position(|t| matches!(t.token, Token::DoubleUnderscore)) {
        Some(j) => {
            let inner = build_raw(&tokens[..j], ctx, depth + 1)?;
            Ok((j + 1, vec![Node::Underline(inner)]))
        }
        None => Ok((0, vec![Node::Text("__".to_string())])),
    }
}

/// Opens on a `TripleAsterisk`. See the module doc comment for the three-way
/// lookahead this implements.
pub(super) fn open_triple(tokens: &[SpannedToken], ctx: &Ctx, depth: usize) -> Result<(usize, Vec<Node>), ParseError> {
    let triple = tokens.iter().position(|t| matches!(t.token, Token::TripleAsterisk));
    let single = tokens.iter().position(|t| matches!(t.token, Token::SingleAsterisk));
    let double = tokens.iter().position(|t| matches!(t.token, Token::DoubleAsterisk));

    let mut best: Option<(usize, u8)> = None;
    for (pos, tag) in [(triple, 0u8), (single, 1u8), (double, 2u8)] {
        if let Some(p) = pos {
            if best.map_or(true, |(bp, _)| p < bp) {
                best = Some((p, tag));
            }
        }
    }

    match best {
        Some((p, 0)) => {
            let inner = build_raw(&tokens[..p], ctx, depth + 1)?;
            Ok((p + 1, vec![Node::Bold(vec![Node::Italic(inner)])]))
        }
        Some((p, 1)) => {
            // `*` closes first: bold outer, italic inner.
            let italic_inner = build_raw(&tokens[..p], ctx, depth + 1)?;
            match double {
                Some(d) if d > p => {
                    let cont = build_raw(&tokens[p + 1..d], ctx, depth + 1)?;
                    let mut children = vec![Node::Italic(italic_inner)];
                    children.extend(cont);
                    Ok((d + 1, vec![Node::Bold(children)]))
                }
                _ => {
                    let cont = build_raw(&tokens[p + 1..], ctx, depth + 1)?;
                    let mut children = vec![Node::Italic(italic_inner)];
                    children.extend(cont);
                    Ok((tokens.len(), vec![Node::Bold(children)]))
                }
            }
        }
        Some((p, _)) => {
            // `**` closes first: italic outer, bold inner.
            let bold_inner = build_raw(&tokens[..p], ctx, depth + 1)?;
            match single {
                Some(s) if s > p => {
                    let cont = build_raw(&tokens[p + 1..s], ctx, depth + 1)?;
                    let mut children = vec![Node::Bold(bold_inner)];
                    children.extend(cont);
                    Ok((s + 1, vec![Node::Italic(children)]))
                }
                _ => {
                    let cont = build_raw(&tokens[p + 1..], ctx, depth + 1)?;
                    let mut children = vec![Node::Bold(bold_inner)];
                    children.extend(cont);
                    Ok((tokens.len(), vec![Node::Italic(children)]))
                }
            }
        }
        None => {
            // Preserves the documented pathological behavior (Open Question 1):
            // wraps the entire remaining slice rather than degrading to text.
            let inner = build_raw(tokens, ctx, depth + 1)?;
            Ok((tokens.len(), vec![Node::Bold(vec![Node::Italic(inner)])]))
        }
    }
}
