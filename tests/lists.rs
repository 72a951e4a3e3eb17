//! Integration coverage for list nesting (§4.3.5) beyond the unit tests living
//! next to the implementation in `src/markweave/tree/lists.rs`.

use markweave::Node;

#[test]
fn ordered_and_unordered_lists_do_not_merge_families() {
    // A `1.` item immediately after a `-` item ends the unordered list and opens
    // a fresh ordered one, rather than appending as a sibling of a mismatched
    // family.
    let nodes = markweave::parse("- a\n1. b\n").unwrap();
    assert_eq!(
        nodes,
        vec![
            Node::UList(vec![Node::ListItem(vec![Node::Text("a".to_string())])], 0),
            Node::OList(vec![Node::ListItem(vec![Node::Text("b".to_string())])], 0),
        ]
    );
}

#[test]
fn three_flat_items_stay_as_one_list() {
    let nodes = markweave::parse("- a\n- b\n- c\n").unwrap();
    match &nodes[..] {
        [Node::UList(items, 0)] => assert_eq!(items.len(), 3),
        other => panic!("expected a single flat UList, got {other:?}"),
    }
}

#[test]
fn list_followed_by_paragraph_after_blank_line() {
    let nodes = markweave::parse("- only item\n\nand then prose").unwrap();
    assert_eq!(
        nodes,
        vec![
            Node::UList(vec![Node::ListItem(vec![Node::Text("only item".to_string())])], 0),
            Node::Paragraph(vec![Node::Text("and then prose".to_string())]),
        ]
    );
}

#[test]
fn list_item_bodies_render_inside_li_tags() {
    let nodes = markweave::parse("- a\n- b\n").unwrap();
    let mut out = String::new();
    markweave::render_html(&nodes, &mut out).unwrap();
    assert_eq!(out, "<ul><li>a</li><li>b</li></ul>");
}
