//! HTML / script tag scanning (§4.2.4).
//!
//!     On `<`, scan forward for matching `>`. Parse attributes as `name[="value"]`
//!     pairs, permitting value-less attributes. A leading `/` after `<` means a
//!     closing tag; a trailing `/>` means self-closing. If the tag name is
//!     `script`, continue scanning up to the literal `</script>` and emit a single
//!     `ScriptTag` with the raw body. If the closing `>` is never found before
//!     end-of-input, the caller rewinds: emits `<` as `Text` and continues.

use super::Tokenizer;
use crate::markweave::error::ParseError;
use crate::markweave::token::{Attrs, Token};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// HTML5 void elements: tags with no closing form even without a trailing `/>`.
/// Looked up once per opening tag rather than hard-coded as a `match` arm list,
/// since this is data that's fixed at compile time but awkward to build inline.
static VOID_ELEMENTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
        "source", "track", "wbr",
    ]
    .into_iter()
    .collect()
});

pub(super) struct TagScan {
    /// Bytes consumed starting at (and including) the `<`.
    pub consumed: usize,
    pub token: Token,
}

impl<'a> Tokenizer<'a> {
    /// Attempts to scan a tag starting at `self.pos`, which must point at `<`.
    /// `Ok(None)` means the rewind case: this is not a well-formed tag, fall back
    /// to treating `<` as literal text.
    pub(super) fn try_scan_tag(&self) -> Result<Option<TagScan>, ParseError> {
        let rest = &self.source[self.pos..];
        debug_assert!(rest.starts_with('<'));
        let after_lt = &rest[1..];

        if let Some(after_slash) = after_lt.strip_prefix('/') {
            return Ok(scan_closing_tag(after_slash));
        }

        match after_lt.chars().next() {
            Some(c) if c.is_ascii_alphabetic() => self.scan_opening_tag(after_lt),
            _ => Ok(None),
        }
    }

    fn scan_opening_tag(&self, after_lt: &str) -> Result<Option<TagScan>, ParseError> {
        let name_len = after_lt
            .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
            .unwrap_or(after_lt.len());
        let name = after_lt[..name_len].to_string();

        let (attrs, explicit_self_closing, tag_len) = match scan_attributes(&after_lt[name_len..], &name)? {
            Some(parsed) => parsed,
            None => return Ok(None),
        };
        let self_closing = explicit_self_closing || VOID_ELEMENTS.contains(name.to_ascii_lowercase().as_str());
        // `tag_len` is relative to `after_lt[name_len..]`; the full tag (from `<`)
        // spans `1 ('<') + name_len + tag_len` bytes.
        let consumed_tag = 1 + name_len + tag_len;

        if !self_closing && name.eq_ignore_ascii_case("script") {
            let body_start = consumed_tag;
            let after_open = &self.source[self.pos + body_start..];
            match find_case_insensitive(after_open, "</script") {
                Some(off) => {
                    let close_rest = &after_open[off..];
                    let gt = close_rest.find('>').ok_or_else(|| ParseError::UnclosedScriptTag {
                        at: self.span_map.lookup(crate::markweave::span::Span::point(self.pos)),
                    })?;
                    let body = after_open[..off].to_string();
                    let consumed = body_start + off + gt + 1;
                    Ok(Some(TagScan {
                        consumed,
                        token: Token::ScriptTag { body, attrs },
                    }))
                }
                None => Err(ParseError::UnclosedScriptTag {
                    at: self.span_map.lookup(crate::markweave::span::Span::point(self.pos)),
                }),
            }
        } else {
            Ok(Some(TagScan {
                consumed: consumed_tag,
                token: Token::HtmlOpenTag {
                    name,
                    attrs,
                    self_closing,
                },
            }))
        }
    }
}

fn scan_closing_tag(after_slash: &str) -> Option<TagScan> {
    let name_len = after_slash
        .find(|c: char| c == '>' || c.is_whitespace())
        .unwrap_or(after_slash.len());
    let name = after_slash[..name_len].to_string();
    if name.is_empty() {
        return None;
    }
    let after_name = &after_slash[name_len..];
    let gt = after_name.find('>')?;
    // '<' + '/' + name + (anything before '>') + '>'
    let consumed = 1 + 1 + name_len + gt + 1;
    Some(TagScan {
        consumed,
        token: Token::HtmlCloseTag { name },
    })
}

/// Parses `name[="value"]` attribute pairs starting right after the tag name, up
/// to and including the terminating `>` or `/>`. Returns `(attrs, self_closing,
/// bytes_consumed)` where `bytes_consumed` is relative to the start of `rest`.
/// Returns `Ok(None)` if `>` is never reached (rewind case).
fn scan_attributes(rest: &str, tag_name: &str) -> Result<Option<(Attrs, bool, usize)>, ParseError> {
    let mut i = 0usize;
    let mut attrs: Attrs = Vec::new();
    loop {
        i += skip_whitespace(&rest[i..]);
        if i >= rest.len() {
            return Ok(None);
        }
        if rest[i..].starts_with("/>") {
            return Ok(Some((attrs, true, i + 2)));
        }
        if rest[i..].starts_with('>') {
            return Ok(Some((attrs, false, i + 1)));
        }

        let name_len = rest[i..]
            .find(|c: char| c.is_whitespace() || c == '=' || c == '>' || c == '/')
            .unwrap_or(rest.len() - i);
        if name_len == 0 {
            return Err(ParseError::InvalidAttribute {
                at: None,
                message: format!("malformed attribute syntax in <{tag_name}>"),
            });
        }
        let attr_name = rest[i..i + name_len].to_string();
        i += name_len;

        let mut look_ahead = i;
        look_ahead += skip_whitespace(&rest[look_ahead..]);
        if look_ahead < rest.len() && rest[look_ahead..].starts_with('=') {
            look_ahead += 1;
            look_ahead += skip_whitespace(&rest[look_ahead..]);
            if look_ahead >= rest.len() {
                return Ok(None);
            }
            let quote = rest[look_ahead..].chars().next().unwrap();
            let value;
            if quote == '"' || quote == '\'' {
                let value_start = look_ahead + 1;
                match rest[value_start..].find(quote) {
                    Some(end) => {
                        value = rest[value_start..value_start + end].to_string();
                        look_ahead = value_start + end + 1;
                    }
                    None => return Ok(None),
                }
            } else {
                let value_len = rest[look_ahead..]
                    .find(|c: char| c.is_whitespace() || c == '>')
                    .unwrap_or(rest.len() - look_ahead);
                value = rest[look_ahead..look_ahead + value_len].to_string();
                look_ahead += value_len;
            }
            attrs.push((attr_name, Some(value)));
            i = look_ahead;
        } else {
            attrs.push((attr_name, None));
            i = look_ahead;
        }
    }
}

fn skip_whitespace(s: &str) -> usize {
    s.find(|c: char| !c.is_whitespace()).unwrap_or(s.len())
}

fn find_case_insensitive(haystack: &str, needle: &str) -> Option<usize> {
    let haystack_lower = haystack.to_ascii_lowercase();
    haystack_lower.find(needle)
}
