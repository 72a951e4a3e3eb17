//! Plain-text preservation (invariant T1: characters with no Markdown meaning
//! pass through to the tree verbatim) and the frontmatter-stripping path (§5),
//! which together behave like a content round-trip even though the crate has
//! no serializer back to Markdown.

use markweave::{Node, ParseOptions};

#[test]
fn plain_prose_with_no_markdown_syntax_is_preserved_verbatim() {
    let source = "Plain prose, with punctuation: commas, colons; and a period.";
    let nodes = markweave::parse(source).unwrap();
    assert_eq!(nodes, vec![Node::Paragraph(vec![Node::Text(source.to_string())])]);
}

#[test]
fn special_characters_survive_when_escaped() {
    let nodes = markweave::parse(r"\*not emphasis\* and \_not italic\_").unwrap();
    assert_eq!(
        nodes,
        vec![Node::Paragraph(vec![Node::Text(
            "*not emphasis* and _not italic_".to_string()
        )])]
    );
}

#[test]
fn unicode_text_is_preserved_byte_for_byte() {
    let source = "caf\u{e9} \u{2014} \u{65e5}\u{672c}\u{8a9e}";
    let nodes = markweave::parse(source).unwrap();
    assert_eq!(nodes, vec![Node::Paragraph(vec![Node::Text(source.to_string())])]);
}

#[test]
fn frontmatter_is_stripped_before_tokenizing_by_default() {
    let source = "+++\ntitle = \"x\"\n+++\nbody text";
    let nodes = markweave::parse(source).unwrap();
    assert_eq!(nodes, vec![Node::Paragraph(vec![Node::Text("body text".to_string())])]);
}

#[test]
fn frontmatter_is_kept_as_literal_text_when_disabled() {
    let options = ParseOptions {
        strip_frontmatter: false,
        ..ParseOptions::default()
    };
    let source = "+++\ntitle = \"x\"\n+++\nbody text";
    let nodes = markweave::parse_with(source, &options).unwrap();
    let rendered = match &nodes[..] {
        [Node::Paragraph(children)] => children
            .iter()
            .map(|n| match n {
                Node::Text(s) => s.clone(),
                _ => panic!("expected only text nodes, got {n:?}"),
            })
            .collect::<String>(),
        other => panic!("expected a single paragraph, got {other:?}"),
    };
    assert!(rendered.contains("title"));
}

#[test]
fn a_document_with_no_well_formed_frontmatter_delimiter_is_unaffected() {
    let source = "+++ not frontmatter\njust text";
    let nodes = markweave::parse(source).unwrap();
    match &nodes[..] {
        [Node::Paragraph(_)] => {}
        other => panic!("expected a single paragraph, got {other:?}"),
    }
}
