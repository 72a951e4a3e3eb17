//! Integration coverage for raw HTML/script passthrough (§4.2.4, §4.3.7) beyond
//! the unit tests in `src/markweave/tokenizer/html.rs` and `src/markweave/tree/html.rs`.

use markweave::Node;

#[test]
fn script_body_is_captured_raw_and_unescaped() {
    let nodes = markweave::parse("<script>alert(1);</script>").unwrap();
    assert_eq!(nodes, vec![Node::CustomScript("alert(1);".to_string(), Vec::new())]);
}

#[test]
fn script_tag_keeps_its_attributes() {
    let nodes = markweave::parse(r#"<script type="module">run();</script>"#).unwrap();
    assert_eq!(
        nodes,
        vec![Node::CustomScript(
            "run();".to_string(),
            vec![("type".to_string(), Some("module".to_string()))]
        )]
    );
}

#[test]
fn unclosed_script_tag_is_a_hard_error() {
    let err = markweave::parse("<script>no closing tag").unwrap_err();
    assert!(matches!(err, markweave::ParseError::UnclosedScriptTag { .. }));
}

#[test]
fn custom_html_with_valueless_and_quoted_attributes() {
    let nodes = markweave::parse(r#"<input disabled type='text'/>"#).unwrap();
    assert_eq!(
        nodes,
        vec![Node::CustomHtml(
            "input".to_string(),
            vec![("disabled".to_string(), None), ("type".to_string(), Some("text".to_string()))],
            Vec::new(),
            true
        )]
    );
}

#[test]
fn malformed_attribute_syntax_is_an_error() {
    let err = markweave::parse("<div =bad>x</div>").unwrap_err();
    assert!(matches!(err, markweave::ParseError::InvalidAttribute { .. }));
}

#[test]
fn br_without_trailing_slash_is_still_treated_as_void() {
    // HTML5 void elements (`br`, `hr`, `img`, ...) need no explicit `/>` to be
    // self-closing; see `VOID_ELEMENTS` in `tokenizer::html`.
    let nodes = markweave::parse("<br>").unwrap();
    assert_eq!(nodes, vec![Node::CustomHtml("br".to_string(), Vec::new(), Vec::new(), true)]);
}

#[test]
fn script_renders_with_body_unescaped() {
    let nodes = markweave::parse("<script>if (a < b) {}</script>").unwrap();
    let mut out = String::new();
    markweave::render_html(&nodes, &mut out).unwrap();
    assert_eq!(out, "<script>if (a < b) {}</script>");
}
