//! Integration coverage for blockquote nesting (§4.3.5) complementing the unit
//! tests in `src/markweave/tree/lists.rs` and the §8 scenario 5 in `scenarios.rs`.

use markweave::Node;

#[test]
fn flat_quote_with_three_lines() {
    let nodes = markweave::parse("> a\n> b\n> c\n").unwrap();
    match &nodes[..] {
        [Node::Quote(items, 1)] => assert_eq!(items.len(), 3),
        other => panic!("expected a single flat Quote, got {other:?}"),
    }
}

#[test]
fn quote_followed_by_paragraph_after_blank_line() {
    let nodes = markweave::parse("> quoted\n\nplain").unwrap();
    assert_eq!(
        nodes,
        vec![
            Node::Quote(vec![Node::Paragraph(vec![Node::Text("quoted".to_string())])], 1),
            Node::Paragraph(vec![Node::Text("plain".to_string())]),
        ]
    );
}

#[test]
fn quote_renders_as_blockquote_with_one_paragraph_per_level() {
    let nodes = markweave::parse("> a\n> b\n").unwrap();
    let mut out = String::new();
    markweave::render_html(&nodes, &mut out).unwrap();
    assert_eq!(out, "<blockquote><p>a</p><p>b</p></blockquote>");
}
