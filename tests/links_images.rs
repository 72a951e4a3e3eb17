//! Integration coverage for links/images (§4.3.3) and footnotes, beyond the
//! unit tests in `src/markweave/tree/links.rs`.

use markweave::Node;

#[test]
fn plain_link_with_uri() {
    let nodes = markweave::parse("[home](https://example.com)").unwrap();
    assert_eq!(
        nodes,
        vec![Node::Paragraph(vec![Node::Link(
            vec![Node::Text("home".to_string())],
            Some("https://example.com".to_string())
        )])]
    );
}

#[test]
fn image_with_no_bracketed_uri() {
    let nodes = markweave::parse("![a plain alt](pic.png)").unwrap();
    assert_eq!(
        nodes,
        vec![Node::Paragraph(vec![Node::Image(
            "a plain alt".to_string(),
            Some("pic.png".to_string())
        )])]
    );
}

#[test]
fn link_description_can_itself_contain_emphasis() {
    let nodes = markweave::parse("[**bold** link](x)").unwrap();
    assert_eq!(
        nodes,
        vec![Node::Paragraph(vec![Node::Link(
            vec![Node::Bold(vec![Node::Text("bold".to_string())]), Node::Text(" link".to_string())],
            Some("x".to_string())
        )])]
    );
}

#[test]
fn footnote_reference_has_no_dedicated_node_and_is_flattened_to_literal_text() {
    // §3.3's `Node` grammar has no footnote variant; §4.3's dispatch falls back
    // to the literal source form (see `tree::build_raw`'s `FootnoteRef` arm).
    let nodes = markweave::parse("see [^1] for details").unwrap();
    assert_eq!(
        nodes,
        vec![Node::Paragraph(vec![Node::Text("see [^1] for details".to_string())])]
    );
}

#[test]
fn footnote_definition_is_flattened_with_its_trailing_colon() {
    let nodes = markweave::parse("[^1]: the definition").unwrap();
    assert_eq!(
        nodes,
        vec![Node::Paragraph(vec![Node::Text("[^1]: the definition".to_string())])]
    );
}

#[test]
fn link_renders_as_anchor_tag() {
    let nodes = markweave::parse("[home](https://example.com)").unwrap();
    let mut out = String::new();
    markweave::render_html(&nodes, &mut out).unwrap();
    assert_eq!(out, "<p><a href=\"https://example.com\">home</a></p>");
}
