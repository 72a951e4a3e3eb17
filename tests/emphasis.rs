//! Integration coverage for emphasis resolution (§4.3.1) beyond the unit tests
//! already living next to the implementation in `src/markweave/tree/emphasis.rs`.

use markweave::Node;

#[test]
fn strikethrough_wraps_its_text() {
    let nodes = markweave::parse("~~gone~~").unwrap();
    assert_eq!(
        nodes,
        vec![Node::Paragraph(vec![Node::Strikethrough(vec![Node::Text(
            "gone".to_string()
        )])])]
    );
}

#[test]
fn double_underscore_wraps_underline() {
    let nodes = markweave::parse("__x__").unwrap();
    assert_eq!(
        nodes,
        vec![Node::Paragraph(vec![Node::Underline(vec![Node::Text("x".to_string())])])]
    );
    let mut out = String::new();
    markweave::render_html(&nodes, &mut out).unwrap();
    assert_eq!(out, "<p><u>x</u></p>");
}

#[test]
fn underscore_italic_matches_asterisk_italic() {
    let nodes = markweave::parse("_x_").unwrap();
    assert_eq!(
        nodes,
        vec![Node::Paragraph(vec![Node::Italic(vec![Node::Text("x".to_string())])])]
    );
}

#[test]
fn unclosed_bold_degrades_to_literal_text() {
    // §7's `UnclosedDelimiter` policy: an unpaired `**` degrades to plain text
    // rather than failing the whole parse.
    let nodes = markweave::parse("**never closes").unwrap();
    assert_eq!(
        nodes,
        vec![Node::Paragraph(vec![Node::Text("**never closes".to_string())])]
    );
}

#[test]
fn unclosed_italic_degrades_to_literal_text() {
    let nodes = markweave::parse("*never closes").unwrap();
    assert_eq!(
        nodes,
        vec![Node::Paragraph(vec![Node::Text("*never closes".to_string())])]
    );
}

#[test]
fn bold_and_italic_can_nest_inside_a_paragraph_with_other_text() {
    let nodes = markweave::parse("a **b** c *d* e").unwrap();
    assert_eq!(
        nodes,
        vec![Node::Paragraph(vec![
            Node::Text("a ".to_string()),
            Node::Bold(vec![Node::Text("b".to_string())]),
            Node::Text(" c ".to_string()),
            Node::Italic(vec![Node::Text("d".to_string())]),
            Node::Text(" e".to_string()),
        ])]
    );
}

#[test]
fn triple_asterisk_with_no_close_wraps_the_remainder() {
    // Open Question 1: preserved pathological behavior, not silently fixed.
    let nodes = markweave::parse("***never closes").unwrap();
    assert_eq!(
        nodes,
        vec![Node::Paragraph(vec![Node::Bold(vec![Node::Italic(vec![Node::Text(
            "never closes".to_string()
        )])])])]
    );
}
