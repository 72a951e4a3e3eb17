//! The §8 end-to-end scenarios, verbatim, one test per scenario.

use markweave::Node;

#[test]
fn scenario_1_heading_in_a_div() {
    let nodes = markweave::parse("<div>\n# Hi\n</div>\n").unwrap();
    assert_eq!(
        nodes,
        vec![Node::CustomHtml(
            "div".to_string(),
            Vec::new(),
            vec![Node::Heading(1, vec![Node::Text("Hi".to_string())])],
            false
        )]
    );
}

#[test]
fn scenario_2_nested_list() {
    let nodes = markweave::parse("- a\n- b\n - c\n- d\n").unwrap();
    assert_eq!(
        nodes,
        vec![Node::UList(
            vec![
                Node::ListItem(vec![Node::Text("a".to_string())]),
                Node::ListItem(vec![
                    Node::Text("b".to_string()),
                    Node::UList(vec![Node::ListItem(vec![Node::Text("c".to_string())])], 1),
                ]),
                Node::ListItem(vec![Node::Text("d".to_string())]),
            ],
            0
        )]
    );
}

#[test]
fn scenario_3_bold_italic_ambiguity() {
    let nodes = markweave::parse("***abc** de*").unwrap();
    assert_eq!(
        nodes,
        vec![Node::Paragraph(vec![Node::Italic(vec![
            Node::Bold(vec![Node::Text("abc".to_string())]),
            Node::Text(" de".to_string()),
        ])])]
    );
}

#[test]
fn scenario_4_link_with_bracketed_uri_containing_parens() {
    let nodes = markweave::parse("[a](<https://x.y/(z)>)").unwrap();
    assert_eq!(
        nodes,
        vec![Node::Paragraph(vec![Node::Link(
            vec![Node::Text("a".to_string())],
            Some("https://x.y/(z)".to_string())
        )])]
    );
}

#[test]
fn scenario_5_nested_blockquote() {
    let nodes = markweave::parse("> f\n>> g\n>>> h\n>> i").unwrap();
    assert_eq!(
        nodes,
        vec![Node::Quote(
            vec![Node::Paragraph(vec![
                Node::Text("f".to_string()),
                Node::Quote(
                    vec![
                        Node::Paragraph(vec![
                            Node::Text("g".to_string()),
                            Node::Quote(vec![Node::Paragraph(vec![Node::Text("h".to_string())])], 3),
                        ]),
                        Node::Text("i".to_string()),
                    ],
                    2
                ),
            ])],
            1
        )]
    );
}

#[test]
fn scenario_6_fenced_code_with_language() {
    let nodes = markweave::parse("```rust\nlet x=1;\n```").unwrap();
    assert_eq!(
        nodes,
        vec![Node::MultilineCode(
            vec![Node::Text("let x=1;\n".to_string())],
            Some("rust".to_string())
        )]
    );
}
