//! Horizontal rules and inline breaks (§4.3.8).
//!
//!     `TripleHyphen`/`TripleEquals` only ever reach the tree builder when the
//!     tokenizer already confirmed they stand alone on their line (§4.2.3), so no
//!     further context check is needed here — they map straight to
//!     `Node::HorizontalRule`. `TripleUnderscore` maps to `Node::InlineLineBreak`
//!     in this dialect rather than a thematic break; see the crate root doc
//!     comment and DESIGN.md's Open Question #2 for why that's kept as-is.

use crate::markweave::ast::Node;

pub(super) fn horizontal_rule() -> Node {
    Node::HorizontalRule
}

pub(super) fn inline_line_break() -> Node {
    Node::InlineLineBreak
}
