//! End-to-end parse-then-render coverage (§6), exercising `render_html`
//! against the public `parse` entry point rather than hand-built `Node` trees.

#[test]
fn heading_level_is_clamped_above_six() {
    let nodes = vec![markweave::Node::Heading(9, vec![markweave::Node::Text("x".to_string())])];
    let mut out = String::new();
    markweave::render_html(&nodes, &mut out).unwrap();
    assert_eq!(out, "<h6>x</h6>");
}

#[test]
fn nested_emphasis_renders_nested_tags() {
    // `**` is the first closer found after the ambiguous `***` opener, so this
    // is italic-outer/bold-inner (§9 Open Question 1), not the other way round.
    let nodes = markweave::parse("***abc** de*").unwrap();
    let mut out = String::new();
    markweave::render_html(&nodes, &mut out).unwrap();
    assert_eq!(out, "<p><em><strong>abc</strong> de</em></p>");
}

#[test]
fn div_with_heading_renders_without_an_enclosing_paragraph() {
    let nodes = markweave::parse("<div>\n# Hi\n</div>\n").unwrap();
    let mut out = String::new();
    markweave::render_html(&nodes, &mut out).unwrap();
    assert_eq!(out, "<div><h1>Hi</h1></div>");
}

#[test]
fn nested_blockquote_levels_render_as_nested_blockquote_tags() {
    let nodes = markweave::parse("> f\n>> g\n>>> h\n>> i").unwrap();
    let mut out = String::new();
    markweave::render_html(&nodes, &mut out).unwrap();
    // Level only governs nesting depth in the tree, not a rendered attribute —
    // each level of `>` becomes one layer of `<blockquote>`.
    assert!(out.starts_with("<blockquote>"));
    assert!(out.ends_with("</blockquote>"));
    assert_eq!(out.matches("<blockquote>").count(), out.matches("</blockquote>").count());
}

#[test]
fn horizontal_rule_and_surrounding_paragraphs_render_in_source_order() {
    // The blank line right after `---` has no trailing inline run to collapse,
    // so it degrades to a standalone `LineBreak` per §4.3.6 rather than vanishing.
    let nodes = markweave::parse("above\n\n---\n\nbelow").unwrap();
    let mut out = String::new();
    markweave::render_html(&nodes, &mut out).unwrap();
    assert_eq!(out, "<p>above</p><hr><br><p>below</p>");
}
