//! The renderer (§4.4, §6.3).
//!
//!     Rendering's contract: "the emitted HTML reopens the node's tag, emits
//!     children in order, and closes the tag", except for void tags (`hr`, `br`,
//!     `img`) which emit a single self-closing form. [`Renderer`] is a trait with
//!     one method per [`Node`] variant (mirroring a depth-first AST visitor), and
//!     [`HtmlRenderer`] is the one implementation, writing into any
//!     `std::fmt::Write` sink per the tag table in §6.3.
//!
//!     No HTML-escaping crate is pulled in for this; escaping is hand-rolled in
//!     [`escape_html`] — a small enough helper that a dependency for it would be
//!     the wrong trade, in keeping with a preference for small self-contained
//!     helpers over a one-function crate.

use crate::markweave::ast::Node;
use crate::markweave::token::Attrs;
use std::fmt::{self, Write};

/// A depth-first visitor over a `[Node]` tree. The default method bodies dispatch
/// children through [`Renderer::render_node`]/[`Renderer::render_all`], so an
/// implementor only needs to override the variants it cares about; `HtmlRenderer`
/// overrides all of them to follow the §6.3 tag table precisely.
pub trait Renderer {
    fn render_all(&mut self, nodes: &[Node]) -> fmt::Result {
        for node in nodes {
            self.render_node(node)?;
        }
        Ok(())
    }

    fn render_node(&mut self, node: &Node) -> fmt::Result {
        match node {
            Node::Text(s) => self.text(s),
            Node::InlineLineBreak => self.line_break(),
            Node::Bold(c) => self.bold(c),
            Node::Italic(c) => self.italic(c),
            Node::Strikethrough(c) => self.strikethrough(c),
            Node::Underline(c) => self.underline(c),
            Node::Code(c, lang) => self.code(c, lang.as_deref()),
            Node::Link(c, uri) => self.link(c, uri.as_deref()),
            Node::Image(alt, uri) => self.image(alt, uri.as_deref()),
            Node::Paragraph(c) => self.paragraph(c),
            Node::Heading(n, c) => self.heading(*n, c),
            Node::HorizontalRule => self.horizontal_rule(),
            Node::LineBreak => self.paragraph_break(),
            Node::Div(c) => self.div(c),
            Node::MultilineCode(c, lang) => self.multiline_code(c, lang.as_deref()),
            Node::ListItem(c) => self.list_item(c),
            Node::UList(items, level) => self.ulist(items, *level),
            Node::OList(items, level) => self.olist(items, *level),
            Node::Quote(items, level) => self.quote(items, *level),
            Node::CustomHtml(tag, attrs, c, self_closing) => self.custom_html(tag, attrs, c, *self_closing),
            Node::CustomScript(body, attrs) => self.custom_script(body, attrs),
        }
    }

    fn text(&mut self, s: &str) -> fmt::Result;
    fn line_break(&mut self) -> fmt::Result;
    fn bold(&mut self, children: &[Node]) -> fmt::Result;
    fn italic(&mut self, children: &[Node]) -> fmt::Result;
    fn strikethrough(&mut self, children: &[Node]) -> fmt::Result;
    fn underline(&mut self, children: &[Node]) -> fmt::Result;
    fn code(&mut self, children: &[Node], lang: Option<&str>) -> fmt::Result;
    fn link(&mut self, children: &[Node], uri: Option<&str>) -> fmt::Result;
    fn image(&mut self, alt: &str, uri: Option<&str>) -> fmt::Result;
    fn paragraph(&mut self, children: &[Node]) -> fmt::Result;
    fn heading(&mut self, level: u8, children: &[Node]) -> fmt::Result;
    fn horizontal_rule(&mut self) -> fmt::Result;
    fn paragraph_break(&mut self) -> fmt::Result;
    fn div(&mut self, children: &[Node]) -> fmt::Result;
    fn multiline_code(&mut self, children: &[Node], lang: Option<&str>) -> fmt::Result;
    fn list_item(&mut self, children: &[Node]) -> fmt::Result;
    fn ulist(&mut self, items: &[Node], level: usize) -> fmt::Result;
    fn olist(&mut self, items: &[Node], level: usize) -> fmt::Result;
    fn quote(&mut self, items: &[Node], level: usize) -> fmt::Result;
    fn custom_html(&mut self, tag: &str, attrs: &Attrs, children: &[Node], self_closing: bool) -> fmt::Result;
    fn custom_script(&mut self, body: &str, attrs: &Attrs) -> fmt::Result;
}

/// Writes HTML into any `std::fmt::Write` sink, per the tag table in §6.3.
/// `level` on `UList`/`OList`/`Quote` is source indentation/`>`-count
/// (invariant N1) and carries no separate HTML meaning — nesting is already
/// structural in the tree, so the renderer doesn't consult it.
pub struct HtmlRenderer<'a, W: Write> {
    sink: &'a mut W,
}

impl<'a, W: Write> HtmlRenderer<'a, W> {
    pub fn new(sink: &'a mut W) -> Self {
        HtmlRenderer { sink }
    }

    fn tag(&mut self, name: &str, children: &[Node]) -> fmt::Result {
        write!(self.sink, "<{name}>")?;
        self.render_all(children)?;
        write!(self.sink, "</{name}>")
    }
}

impl<'a, W: Write> Renderer for HtmlRenderer<'a, W> {
    fn text(&mut self, s: &str) -> fmt::Result {
        write!(self.sink, "{}", escape_html(s))
    }

    fn line_break(&mut self) -> fmt::Result {
        write!(self.sink, "<br>")
    }

    fn bold(&mut self, children: &[Node]) -> fmt::Result {
        self.tag("strong", children)
    }

    fn italic(&mut self, children: &[Node]) -> fmt::Result {
        self.tag("em", children)
    }

    fn strikethrough(&mut self, children: &[Node]) -> fmt::Result {
        self.tag("s", children)
    }

    fn underline(&mut self, children: &[Node]) -> fmt::Result {
        self.tag("u", children)
    }

    fn code(&mut self, children: &[Node], _lang: Option<&str>) -> fmt::Result {
        self.tag("code", children)
    }

    fn link(&mut self, children: &[Node], uri: Option<&str>) -> fmt::Result {
        write!(self.sink, "<a href=\"{}\">", escape_html(uri.unwrap_or("")))?;
        self.render_all(children)?;
        write!(self.sink, "</a>")
    }

    fn image(&mut self, alt: &str, _uri: Option<&str>) -> fmt::Result {
        // No `src` attribute in this dialect (§6.3: `<img alt="…">`).
        write!(self.sink, "<img alt=\"{}\">", escape_html(alt))
    }

    fn paragraph(&mut self, children: &[Node]) -> fmt::Result {
        self.tag("p", children)
    }

    fn heading(&mut self, level: u8, children: &[Node]) -> fmt::Result {
        let tag = format!("h{}", level.clamp(1, 6));
        self.tag(&tag, children)
    }

    fn horizontal_rule(&mut self) -> fmt::Result {
        write!(self.sink, "<hr>")
    }

    fn paragraph_break(&mut self) -> fmt::Result {
        write!(self.sink, "<br>")
    }

    fn div(&mut self, children: &[Node]) -> fmt::Result {
        self.tag("div", children)
    }

    fn multiline_code(&mut self, children: &[Node], lang: Option<&str>) -> fmt::Result {
        write!(self.sink, "<pre><code class=\"lang-{}\">", escape_html(lang.unwrap_or("")))?;
        self.render_all(children)?;
        write!(self.sink, "</code></pre>")
    }

    fn list_item(&mut self, children: &[Node]) -> fmt::Result {
        self.tag("li", children)
    }

    fn ulist(&mut self, items: &[Node], _level: usize) -> fmt::Result {
        // `items` are `Node::ListItem`s, which already render themselves as
        // `<li>...</li>` via `list_item` above — don't wrap a second time here.
        write!(self.sink, "<ul>")?;
        for item in items {
            self.render_node(item)?;
        }
        write!(self.sink, "</ul>")
    }

    fn olist(&mut self, items: &[Node], _level: usize) -> fmt::Result {
        write!(self.sink, "<ol>")?;
        for item in items {
            self.render_node(item)?;
        }
        write!(self.sink, "</ol>")
    }

    fn quote(&mut self, items: &[Node], _level: usize) -> fmt::Result {
        write!(self.sink, "<blockquote>")?;
        self.render_all(items)?;
        write!(self.sink, "</blockquote>")
    }

    fn custom_html(&mut self, tag: &str, attrs: &Attrs, children: &[Node], self_closing: bool) -> fmt::Result {
        if self_closing {
            return write!(self.sink, "<{tag}{}>", render_attrs(attrs));
        }
        write!(self.sink, "<{tag}{}>", render_attrs(attrs))?;
        self.render_all(children)?;
        write!(self.sink, "</{tag}>")
    }

    fn custom_script(&mut self, body: &str, attrs: &Attrs) -> fmt::Result {
        write!(self.sink, "<script{}>{}</script>", render_attrs(attrs), body)
    }
}

fn render_attrs(attrs: &Attrs) -> String {
    let mut s = String::new();
    for (k, v) in attrs {
        s.push(' ');
        s.push_str(k);
        if let Some(v) = v {
            let _ = write!(s, "=\"{}\"", escape_html(v));
        }
    }
    s
}

/// Escapes `&`, `<`, `>`, `"` for safe inclusion in HTML text/attribute contexts.
/// `CustomHtml`/`CustomScript` bodies are passed through raw (they are,
/// deliberately, passthrough content — §4.3.7), so only plain text and attribute
/// values go through this.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// `render_html(nodes, sink) -> ()` per §6.1, taking any `std::fmt::Write` sink.
pub fn render_html<W: Write>(nodes: &[Node], sink: &mut W) -> fmt::Result {
    HtmlRenderer::new(sink).render_all(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(nodes: &[Node]) -> String {
        let mut out = String::new();
        render_html(nodes, &mut out).unwrap();
        out
    }

    #[test]
    fn renders_heading_and_paragraph() {
        let nodes = vec![
            Node::Heading(2, vec![Node::Text("Hi".to_string())]),
            Node::Paragraph(vec![Node::Bold(vec![Node::Text("x".to_string())])]),
        ];
        assert_eq!(render(&nodes), "<h2>Hi</h2><p><strong>x</strong></p>");
    }

    #[test]
    fn escapes_text_content() {
        let nodes = vec![Node::Paragraph(vec![Node::Text("<a> & \"b\"".to_string())])];
        assert_eq!(render(&nodes), "<p>&lt;a&gt; &amp; &quot;b&quot;</p>");
    }

    #[test]
    fn image_has_no_src_attribute() {
        let nodes = vec![Node::Image("alt text".to_string(), Some("x.png".to_string()))];
        assert_eq!(render(&nodes), "<img alt=\"alt text\">");
    }

    #[test]
    fn void_and_line_break_tags_are_self_closing() {
        let nodes = vec![Node::HorizontalRule, Node::LineBreak, Node::InlineLineBreak];
        assert_eq!(render(&nodes), "<hr><br><br>");
    }

    #[test]
    fn custom_html_preserves_attribute_order_and_valueless_attrs() {
        let nodes = vec![Node::CustomHtml(
            "input".to_string(),
            vec![("disabled".to_string(), None), ("type".to_string(), Some("text".to_string()))],
            Vec::new(),
            true,
        )];
        assert_eq!(render(&nodes), "<input disabled type=\"text\">");
    }

    #[test]
    fn custom_html_with_children_gets_a_closing_tag() {
        let nodes = vec![Node::CustomHtml(
            "div".to_string(),
            Vec::new(),
            vec![Node::Paragraph(vec![Node::Text("x".to_string())])],
            false,
        )];
        assert_eq!(render(&nodes), "<div><p>x</p></div>");
    }

    #[test]
    fn rendering_is_deterministic() {
        let nodes = vec![Node::Paragraph(vec![Node::Text("stable".to_string())])];
        assert_eq!(render(&nodes), render(&nodes));
    }
}
