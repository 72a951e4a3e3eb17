//! Blank-line paragraph inference (§4.3.6).
//!
//!     Paragraphs are never opened explicitly — the main dispatch loop in
//!     [`super::build_raw`] pushes inline nodes directly onto `output`. Whenever it
//!     detects a blank-line boundary (two consecutive `Newline` tokens) it calls
//!     [`infer`], which walks back over the nodes just pushed and collapses the
//!     trailing run of inline nodes into a `Paragraph`. Block nodes (lists, quotes,
//!     headings, divs, fenced code, rules, raw HTML) stop the walk — they are never
//!     pulled into a paragraph. [`finish`] applies the same collapse once more at
//!     the very end of a token slice, since end-of-input never supplies a second
//!     `Newline` to trigger [`infer`].

use crate::markweave::ast::Node;

/// Triggered by a blank-line boundary (§4.3.6): pops the trailing run of inline
/// nodes off `out` and wraps them in a `Paragraph`. A run with nothing to pop
/// means the blank line stood alone — represented as `Node::LineBreak` per §3.3.
pub(super) fn infer(out: &mut Vec<Node>) {
    let mut para = Vec::new();
    while matches!(out.last(), Some(n) if n.is_inline()) {
        para.push(out.pop().unwrap());
    }
    if para.is_empty() {
        out.push(Node::LineBreak);
        return;
    }
    para.reverse();
    out.push(Node::Paragraph(para));
}

/// Applies the same collapse as [`infer`] to whatever trailing inline run is left
/// over at the end of a token slice (no closing blank line to trigger it). A no-op
/// if the slice already ends on a block node or is empty.
pub(super) fn finish(out: &mut Vec<Node>) {
    let mut split_at = out.len();
    while split_at > 0 && out[split_at - 1].is_inline() {
        split_at -= 1;
    }
    if split_at == out.len() {
        return;
    }
    let tail = out.split_off(split_at);
    out.push(Node::Paragraph(tail));
}
