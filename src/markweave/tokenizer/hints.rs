//! Contextual disambiguation helpers (§4.2.2).
//!
//!     Hints are produced by looking at tokens already emitted since the start of the
//!     current line (bounded lookback) or at the raw characters remaining on the
//!     current line (bounded lookahead). Per the design notes, this implementation
//!     takes the "iterate the token vector in reverse" option rather than threading
//!     extra side state through the tokenizer, since clarity matters more than the
//!     O(n*k) cost for realistic document sizes.

use crate::markweave::token::{SpannedToken, Token};

/// Returns the slice of already-emitted tokens since (and excluding) the most
/// recent `Newline`, or since the start of the stream if there is none.
pub fn current_line_tokens(tokens: &[SpannedToken]) -> &[SpannedToken] {
    let start = tokens
        .iter()
        .rposition(|t| matches!(t.token, Token::Newline))
        .map(|i| i + 1)
        .unwrap_or(0);
    &tokens[start..]
}

/// `listTypeHint()`: returns the indent (in columns) iff every token emitted since
/// the last newline is blank `Text` (whitespace only). An empty line-so-far (the
/// very start of input, or right after a newline) also counts, with indent 0.
pub fn list_type_hint(tokens: &[SpannedToken]) -> Option<usize> {
    let line = current_line_tokens(tokens);
    let mut indent = 0usize;
    for t in line {
        match &t.token {
            Token::Text(s) if s.chars().all(|c| c == ' ' || c == '\t') => {
                indent += s.chars().count();
            }
            _ => return None,
        }
    }
    Some(indent)
}

/// `IsBQuote`: a run of `>` is only a blockquote marker when the tokens since the
/// last newline are themselves only whitespace, list markers, or other blockquote
/// markers (so that `>> text` nests inside `> text`).
pub fn blockquote_context_ok(tokens: &[SpannedToken]) -> bool {
    let line = current_line_tokens(tokens);
    line.iter().all(|t| {
        matches!(
            &t.token,
            Token::Text(s) if s.chars().all(|c| c == ' ' || c == '\t')
        ) || matches!(
            t.token,
            Token::UListItem { .. } | Token::OListItem { .. } | Token::BlockQuote { .. }
        )
    })
}
