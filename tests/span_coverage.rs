//! Integration coverage for source-position tracking (§4.1) through the public
//! `tokenize` entry point, complementing the unit tests in `src/markweave/span.rs`.

use markweave::{tokenize, Span, SpanMap, Token};

#[test]
fn every_emitted_token_resolves_to_a_line_col() {
    let source = "# Title\n\nsome *bold* text\n";
    let (tokens, span_map) = tokenize(source).unwrap();
    for t in &tokens {
        if matches!(t.token, Token::Eof) {
            continue;
        }
        assert!(
            span_map.lookup(t.span).is_some(),
            "token {:?} at {:?} failed to resolve",
            t.token,
            t.span
        );
    }
}

#[test]
fn heading_token_span_points_at_the_hash_run() {
    let source = "## Section\n";
    let (tokens, span_map) = tokenize(source).unwrap();
    let heading = tokens
        .iter()
        .find(|t| matches!(t.token, Token::Heading(_)))
        .unwrap();
    assert_eq!(heading.span.slice(source), "##");
    let lc = span_map.lookup(heading.span).unwrap();
    assert_eq!((lc.start_line, lc.start_col), (0, 0));
}

#[test]
fn a_token_on_the_third_line_resolves_to_line_index_two() {
    let source = "first\nsecond\nthird\n";
    let (tokens, span_map) = tokenize(source).unwrap();
    let third_text = tokens
        .iter()
        .find(|t| matches!(&t.token, Token::Text(s) if s == "third"))
        .unwrap();
    let lc = span_map.lookup(third_text.span).unwrap();
    assert_eq!(lc.start_line, 2);
    assert_eq!(lc.start_col, 0);
}

#[test]
fn span_map_built_directly_from_source_matches_the_one_from_tokenize() {
    let source = "a\nbb\nccc\n";
    let (_, from_tokenize) = tokenize(source).unwrap();
    let direct = SpanMap::build(source);
    let probe = Span::new(3, 5); // inside "bb"
    assert_eq!(
        from_tokenize.lookup(probe).map(|lc| lc.to_string()),
        direct.lookup(probe).map(|lc| lc.to_string())
    );
}
