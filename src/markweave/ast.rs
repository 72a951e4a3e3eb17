//! Document nodes (§3.3).
//!
//!     A single recursive sum type, [`Node`]. Nodes are produced by
//!     [`crate::markweave::tree::TreeBuilder`], are immutable once returned, and are
//!     owned by the caller — there are no cyclic references anywhere in the tree
//!     (§9), so ordinary owned `Vec<Node>` composition is all that's needed; no
//!     `Rc`/arena is warranted.

use crate::markweave::token::Attrs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    // -- inline nodes ----------------------------------------------------
    Text(String),
    InlineLineBreak,
    Bold(Vec<Node>),
    Italic(Vec<Node>),
    Strikethrough(Vec<Node>),
    Underline(Vec<Node>),
    Code(Vec<Node>, Option<String>),
    Link(Vec<Node>, Option<String>),
    Image(String, Option<String>),

    // -- block nodes -------------------------------------------------------
    Paragraph(Vec<Node>),
    Heading(u8, Vec<Node>),
    HorizontalRule,
    /// A paragraph separator: a run of blank lines collapsing to no content.
    LineBreak,
    Div(Vec<Node>),
    MultilineCode(Vec<Node>, Option<String>),
    /// Only ever appears as a direct child of [`Node::UList`]/[`Node::OList`]
    /// (invariant N2).
    ListItem(Vec<Node>),
    /// `level` is the source indentation (§3.3, invariant N1): a nested list with
    /// `level_inner > level_outer` appears inside the outer list's last item.
    UList(Vec<Node>, usize),
    OList(Vec<Node>, usize),
    /// `level` is the count of `>` that opened this quote. Items are block-level
    /// content, typically a single [`Node::Paragraph`] (invariant N2).
    Quote(Vec<Node>, usize),
    /// Preserves original attribute order (invariant N3). The trailing `bool` is
    /// whether the source tag was self-closing/void (§4.2.4's `VOID_ELEMENTS`
    /// table or an explicit `/>`) — `children` is always empty when it's `true`.
    CustomHtml(String, Attrs, Vec<Node>, bool),
    CustomScript(String, Attrs),
}

impl Node {
    /// Whether this node is inline content, per §3.3's inline/block split — used by
    /// [`crate::markweave::tree::paragraphs`] to decide what a paragraph boundary
    /// walk-back may pop.
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            Node::Text(_)
                | Node::InlineLineBreak
                | Node::Bold(_)
                | Node::Italic(_)
                | Node::Strikethrough(_)
                | Node::Underline(_)
                | Node::Code(_, _)
                | Node::Link(_, _)
                | Node::Image(_, _)
        )
    }
}
