//! The tokenizer (§4.2).
//!
//!     Consumes the source string left-to-right in a single pass, emitting a flat
//!     sequence of [`SpannedToken`]s. Two pieces of state drive the contextual
//!     disambiguation described in §4.2: the already-emitted token vector (used as
//!     bounded lookback via [`hints`]) and a scratch buffer that accumulates plain
//!     text before being committed by the `emit`/`flush_text` step (§4.2.1).
//!
//!     Every character is processed exactly once by the dispatch in [`Tokenizer::run`];
//!     ordering of the match arms matters, matching §4.2.3's pseudo-rules.

pub mod frontmatter;
pub mod hints;
mod html;

use crate::markweave::error::ParseError;
use crate::markweave::span::{Span, SpanMap};
use crate::markweave::token::{SpannedToken, Token};

/// Tokenizes `source`, building a fresh [`SpanMap`] along the way.
///
/// This does not itself strip `+++` frontmatter (see
/// [`crate::markweave::tokenizer::frontmatter::strip`]); §1 treats frontmatter
/// handling as an external collaborator's job, invoked before this function if at
/// all, per `crate::parse_with`.
pub fn tokenize(source: &str) -> Result<(Vec<SpannedToken>, SpanMap), ParseError> {
    let span_map = SpanMap::build(source);
    let tokens = Tokenizer::new(source, &span_map).run()?;
    Ok((tokens, span_map))
}

struct Tokenizer<'a> {
    source: &'a str,
    span_map: &'a SpanMap,
    pos: usize,
    tokens: Vec<SpannedToken>,
    scratch: String,
    scratch_start: usize,
    /// Count of currently-open, unclosed `LinkStart`/`ImageStart` tokens. A plain
    /// counter is enough here (see §9's note on small side state vs. token-vector
    /// lookback) because `LinkEnd` only ever needs to know "is one open", not which.
    open_links: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(source: &'a str, span_map: &'a SpanMap) -> Self {
        Tokenizer {
            source,
            span_map,
            pos: 0,
            tokens: Vec::new(),
            scratch: String::new(),
            scratch_start: 0,
            open_links: 0,
        }
    }

    fn run(mut self) -> Result<Vec<SpannedToken>, ParseError> {
        while let Some(c) = self.peek() {
            match c {
                '>' => self.handle_gt(),
                '<' => self.handle_lt()?,
                '\\' => self.handle_escape(),
                '-' => self.handle_dash(),
                '=' => self.handle_equals(),
                '*' => self.handle_asterisk(),
                '~' => self.handle_tilde(),
                '#' => self.handle_hash(),
                '_' => self.handle_underscore(),
                '`' => self.handle_backtick(),
                '!' => self.handle_bang(),
                '[' => self.handle_lbracket(),
                ']' => self.handle_rbracket(),
                ')' => self.handle_rparen(),
                '\n' => self.handle_newline(),
                c if c.is_ascii_digit() => self.handle_digit(),
                c if c.is_whitespace() => {
                    self.push_scratch(c);
                    self.pos += c.len_utf8();
                }
                c => {
                    self.push_scratch(c);
                    self.pos += c.len_utf8();
                }
            }
        }
        self.flush_text();
        // "Always last"; a one-byte span at end-of-input per §4.2.6.
        let eof_span = Span::new(self.source.len(), self.source.len() + 1);
        self.tokens.push(SpannedToken::new(Token::Eof, eof_span));
        Ok(self.tokens)
    }

    // -- cursor helpers ----------------------------------------------------

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.source[self.pos..].chars().nth(n)
    }

    fn count_run(&self, c: char) -> usize {
        self.source[self.pos..].chars().take_while(|&ch| ch == c).count()
    }

    fn alone_on_line_after(&self, skip: usize) -> bool {
        let after = &self.source[self.pos + skip..];
        first_line(after)
            .chars()
            .all(|c| c == ' ' || c == '\t' || c == '\r')
    }

    // -- emit discipline (§4.2.1) -------------------------------------------

    fn push_scratch(&mut self, c: char) {
        if self.scratch.is_empty() {
            self.scratch_start = self.pos;
        }
        self.scratch.push(c);
    }

    /// If the scratch buffer is nonempty, classify it (always as plain `Text` -
    /// every special-meaning character is handled by its own dispatch arm before
    /// ever touching the scratch buffer) and emit it.
    fn flush_text(&mut self) {
        if self.scratch.is_empty() {
            return;
        }
        let span = Span::new(self.scratch_start, self.pos);
        let text = std::mem::take(&mut self.scratch);
        self.emit(Token::Text(text), span);
    }

    /// Pushes `token`, merging into the previous token when both are `Text` (the
    /// only case the emit step mutates a previously-emitted token).
    fn emit(&mut self, token: Token, span: Span) {
        if let Token::Text(ref s) = token {
            if let Some(last) = self.tokens.last_mut() {
                if let Token::Text(prev) = &mut last.token {
                    prev.push_str(s);
                    last.span.extend_to(span);
                    return;
                }
            }
        }
        self.tokens.push(SpannedToken::new(token, span));
    }

    // -- per-character handlers (§4.2.3) ------------------------------------

    fn handle_gt(&mut self) {
        self.flush_text();
        if hints::blockquote_context_ok(&self.tokens) {
            let run = self.count_run('>');
            if matches!(self.peek_nth(run), Some(c) if c == ' ' || c == '\t') {
                let start = self.pos;
                self.pos += run;
                self.emit(Token::BlockQuote { level: run }, Span::new(start, self.pos));
                return;
            }
        }
        self.push_scratch('>');
        self.pos += 1;
    }

    fn handle_lt(&mut self) -> Result<(), ParseError> {
        match self.try_scan_tag()? {
            Some(scan) => {
                self.flush_text();
                let start = self.pos;
                self.pos += scan.consumed;
                self.emit(scan.token, Span::new(start, self.pos));
            }
            None => {
                self.push_scratch('<');
                self.pos += 1;
            }
        }
        Ok(())
    }

    fn handle_escape(&mut self) {
        self.flush_text();
        let start = self.pos;
        self.pos += 1;
        match self.peek() {
            Some('\n') => {
                self.pos += 1;
                self.emit(Token::LineBreak, Span::new(start, self.pos));
            }
            Some(c) => {
                self.pos += c.len_utf8();
                self.emit(Token::Escape(c), Span::new(start, self.pos));
            }
            None => {
                self.emit(Token::Text("\\".to_string()), Span::new(start, self.pos));
            }
        }
    }

    fn handle_dash(&mut self) {
        self.flush_text();
        let run = self.count_run('-');
        if run >= 3 && self.alone_on_line_after(run) {
            let start = self.pos;
            self.pos += run;
            self.emit(Token::TripleHyphen, Span::new(start, self.pos));
            return;
        }
        if run == 1 {
            if let Some(indent) = hints::list_type_hint(&self.tokens) {
                if matches!(self.peek_nth(1), Some(c) if c == ' ' || c == '\t') {
                    let start = self.pos;
                    self.pos += 1;
                    self.emit(Token::UListItem { level: indent }, Span::new(start, self.pos));
                    return;
                }
            }
        }
        for _ in 0..run {
            self.push_scratch('-');
            self.pos += 1;
        }
    }

    fn handle_equals(&mut self) {
        self.flush_text();
        let run = self.count_run('=');
        if run >= 3 && self.alone_on_line_after(run) {
            let start = self.pos;
            self.pos += run;
            self.emit(Token::TripleEquals, Span::new(start, self.pos));
            return;
        }
        for _ in 0..run {
            self.push_scratch('=');
            self.pos += 1;
        }
    }

    fn handle_asterisk(&mut self) {
        self.flush_text();
        let total = self.count_run('*');
        if total == 1 {
            if let Some(indent) = hints::list_type_hint(&self.tokens) {
                if matches!(self.peek_nth(1), Some(c) if c == ' ' || c == '\t') {
                    let start = self.pos;
                    self.pos += 1;
                    self.emit(Token::UListItem { level: indent }, Span::new(start, self.pos));
                    return;
                }
            }
        }
        let mut remaining = total;
        while remaining > 0 {
            let take = if remaining >= 3 { 3 } else { remaining };
            let start = self.pos;
            self.pos += take;
            let tok = match take {
                3 => Token::TripleAsterisk,
                2 => Token::DoubleAsterisk,
                _ => Token::SingleAsterisk,
            };
            self.emit(tok, Span::new(start, self.pos));
            remaining -= take;
        }
    }

    fn handle_underscore(&mut self) {
        self.flush_text();
        let total = self.count_run('_');
        let mut remaining = total;
        while remaining > 0 {
            let take = if remaining >= 3 { 3 } else { remaining };
            let start = self.pos;
            self.pos += take;
            let tok = match take {
                3 => Token::TripleUnderscore,
                2 => Token::DoubleUnderscore,
                _ => Token::SingleUnderscore,
            };
            self.emit(tok, Span::new(start, self.pos));
            remaining -= take;
        }
    }

    fn handle_tilde(&mut self) {
        self.flush_text();
        let mut remaining = self.count_run('~');
        while remaining >= 2 {
            let start = self.pos;
            self.pos += 2;
            self.emit(Token::DoubleTilde, Span::new(start, self.pos));
            remaining -= 2;
        }
        for _ in 0..remaining {
            self.push_scratch('~');
            self.pos += 1;
        }
    }

    fn handle_hash(&mut self) {
        self.flush_text();
        let total = self.count_run('#');
        if hints::list_type_hint(&self.tokens).is_some() {
            if matches!(self.peek_nth(total), Some(c) if c == ' ' || c == '\t') {
                let level = total.min(6) as u8;
                let start = self.pos;
                self.pos += total;
                self.emit(Token::Heading(level), Span::new(start, self.pos));
                return;
            }
        }
        for _ in 0..total {
            self.push_scratch('#');
            self.pos += 1;
        }
    }

    fn handle_backtick(&mut self) {
        self.flush_text();
        let total = self.count_run('`');
        if total >= 3 {
            let start = self.pos;
            self.pos += 3;
            let lang = self.scan_lang();
            self.emit(Token::TripleGrave { lang }, Span::new(start, self.pos));
            let mut remaining = total - 3;
            while remaining > 0 {
                let take = if remaining >= 3 { 3 } else { 1 };
                let s = self.pos;
                self.pos += take;
                let tok = if take == 3 {
                    Token::TripleGrave { lang: None }
                } else {
                    Token::SingleGrave
                };
                self.emit(tok, Span::new(s, self.pos));
                remaining -= take;
            }
            return;
        }
        for _ in 0..total {
            let start = self.pos;
            self.pos += 1;
            self.emit(Token::SingleGrave, Span::new(start, self.pos));
        }
    }

    fn scan_lang(&mut self) -> Option<String> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
        if self.pos > start {
            Some(self.source[start..self.pos].to_string())
        } else {
            None
        }
    }

    fn handle_bang(&mut self) {
        if self.peek_nth(1) == Some('[') {
            let after_bracket = &self.source[self.pos + 1..];
            if first_line(after_bracket).contains(']') {
                self.flush_text();
                let start = self.pos;
                self.pos += 2;
                self.emit(Token::ImageStart, Span::new(start, self.pos));
                self.open_links += 1;
                return;
            }
        }
        self.push_scratch('!');
        self.pos += 1;
    }

    fn handle_lbracket(&mut self) {
        if self.peek_nth(1) == Some('^') {
            if let Some((reference, after_bracket)) = self.scan_footnote_ref() {
                self.flush_text();
                let start = self.pos;
                self.pos = after_bracket;
                if self.peek() == Some(':') {
                    self.pos += 1;
                    self.emit(Token::FootnoteDef(reference), Span::new(start, self.pos));
                } else {
                    self.emit(Token::FootnoteRef(reference), Span::new(start, self.pos));
                }
                return;
            }
        }
        let after = &self.source[self.pos + 1..];
        if first_line(after).contains(']') {
            self.flush_text();
            let start = self.pos;
            self.pos += 1;
            self.emit(Token::LinkStart, Span::new(start, self.pos));
            self.open_links += 1;
            return;
        }
        self.push_scratch('[');
        self.pos += 1;
    }

    fn scan_footnote_ref(&self) -> Option<(String, usize)> {
        let after_caret = self.pos + 1 + 1; // '[' + '^'
        let rest = &self.source[after_caret..];
        let line = first_line(rest);
        let close = line.find(']')?;
        Some((line[..close].to_string(), after_caret + close + 1))
    }

    fn handle_rbracket(&mut self) {
        if self.peek_nth(1) == Some('(') {
            self.flush_text();
            let start = self.pos;
            self.pos += 2;
            self.emit(Token::LinkInterstice, Span::new(start, self.pos));
            self.scan_link_uri();
            return;
        }
        self.push_scratch(']');
        self.pos += 1;
    }

    /// Scans the URI body between `](` and the closing `)`, which is handled
    /// separately by [`Tokenizer::handle_rparen`] so that `LinkEnd` pairing stays
    /// in one place. Handles `<...>`-bracketed URIs (stripping the brackets) so a
    /// literal `(`/`)` inside the URI doesn't terminate the scan early.
    fn scan_link_uri(&mut self) {
        let start = self.pos;
        if self.peek() == Some('<') {
            let after_lt = self.pos + 1;
            if let Some(gt_off) = self.source[after_lt..].find('>') {
                let uri = self.source[after_lt..after_lt + gt_off].to_string();
                self.pos = after_lt + gt_off + 1;
                self.emit(Token::LinkUri(uri), Span::new(start, self.pos));
                return;
            }
        }
        let rest = &self.source[self.pos..];
        let end = rest.find(')').unwrap_or(rest.len());
        let uri = rest[..end].to_string();
        self.pos += end;
        self.emit(Token::LinkUri(uri), Span::new(start, self.pos));
    }

    fn handle_rparen(&mut self) {
        if self.open_links > 0 {
            self.flush_text();
            let start = self.pos;
            self.pos += 1;
            self.emit(Token::LinkEnd, Span::new(start, self.pos));
            self.open_links -= 1;
            return;
        }
        self.push_scratch(')');
        self.pos += 1;
    }

    fn handle_newline(&mut self) {
        self.flush_text();
        let start = self.pos;
        self.pos += 1;
        self.emit(Token::Newline, Span::new(start, self.pos));
    }

    fn handle_digit(&mut self) {
        if hints::list_type_hint(&self.tokens).is_some() {
            if let Some(marker_len) = self.match_ordered_list_marker() {
                self.flush_text();
                let indent = hints::list_type_hint(&self.tokens).unwrap();
                let start = self.pos;
                self.pos += marker_len;
                self.emit(Token::OListItem { level: indent }, Span::new(start, self.pos));
                return;
            }
        }
        let c = self.peek().unwrap();
        self.push_scratch(c);
        self.pos += c.len_utf8();
    }

    /// Matches `1.` (any run of digits, then `.`, then whitespace-or-EOF), returning
    /// the marker's byte length if it matches.
    fn match_ordered_list_marker(&self) -> Option<usize> {
        let rest = &self.source[self.pos..];
        let digits_len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        if digits_len == 0 {
            return None;
        }
        let after_digits = &rest[digits_len..];
        let after_dot = after_digits.strip_prefix('.')?;
        match after_dot.chars().next() {
            Some(c) if c == ' ' || c == '\t' || c == '\n' => Some(digits_len + 1),
            None => Some(digits_len + 1),
            _ => None,
        }
    }
}

fn first_line(s: &str) -> &str {
    match s.find('\n') {
        Some(i) => &s[..i],
        None => s,
    }
}
