//! Pattern 6: Builder
//!
//! Small values come out of a single constructor call. Bigger ones are
//! easier to assemble step by step.

use std::fmt;

/// Wraps `text` in an opening and closing tag, appending into one
/// pre-sized buffer instead of concatenating temporaries.
pub fn wrap(tag: &str, text: &str) -> String {
    let mut sb = String::with_capacity(2 * tag.len() + text.len() + 5);
    sb.push('<');
    sb.push_str(tag);
    sb.push('>');
    sb.push_str(text);
    sb.push_str("</");
    sb.push_str(tag);
    sb.push('>');
    sb
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlElement {
    pub name: String,
    pub text: String,
    pub elements: Vec<HtmlElement>,
}

impl HtmlElement {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            elements: Vec::new(),
        }
    }

    pub fn builder(root_name: impl Into<String>) -> HtmlBuilder {
        HtmlBuilder::new(root_name)
    }

    /// Renders with `indent_size` spaces per nesting level. Element text is
    /// HTML-escaped.
    pub fn render(&self, indent_size: usize) -> String {
        Rendered {
            element: self,
            indent_size,
        }
        .to_string()
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, indent_size: usize, depth: usize) -> fmt::Result {
        let pad = indent_size * depth;
        let text = html_escape::encode_text(&self.text);

        if self.elements.is_empty() {
            return write!(f, "{:pad$}<{}>{}</{}>", "", self.name, text, self.name, pad = pad);
        }

        writeln!(f, "{:pad$}<{}>", "", self.name, pad = pad)?;
        if !self.text.is_empty() {
            writeln!(f, "{:pad$}{}", "", text, pad = pad + indent_size)?;
        }
        for child in &self.elements {
            child.write_tree(f, indent_size, depth + 1)?;
            writeln!(f)?;
        }
        write!(f, "{:pad$}</{}>", "", self.name, pad = pad)
    }
}

struct Rendered<'a> {
    element: &'a HtmlElement,
    indent_size: usize,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.element.write_tree(f, self.indent_size, 0)
    }
}

impl fmt::Display for HtmlElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 2, 0)
    }
}

/// Non-consuming builder: `build()` borrows, so one builder can produce
/// several documents.
#[derive(Debug, Clone)]
pub struct HtmlBuilder {
    root: HtmlElement,
}

impl HtmlBuilder {
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            root: HtmlElement::new(root_name, ""),
        }
    }

    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.root.text = text.into();
        self
    }

    pub fn add_child(&mut self, name: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.add_element(HtmlElement::new(name, text))
    }

    /// Attaches an already built subtree, e.g. a nested list.
    pub fn add_element(&mut self, element: HtmlElement) -> &mut Self {
        tracing::debug!(parent = %self.root.name, child = %element.name, "adding element");
        self.root.elements.push(element);
        self
    }

    pub fn build(&self) -> HtmlElement {
        self.root.clone()
    }

    /// Drops text and children; the root tag stays.
    pub fn clear(&mut self) {
        self.root.text.clear();
        self.root.elements.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_paragraph() {
        assert_eq!(wrap("p", "hello"), "<p>hello</p>");
    }

    #[test]
    fn test_wrap_is_literal() {
        assert_eq!(wrap("b", "a < b"), "<b>a < b</b>");
        assert_eq!(wrap("p", ""), "<p></p>");
    }

    #[test]
    fn test_leaf_renders_on_one_line() {
        assert_eq!(HtmlElement::new("li", "hello").to_string(), "<li>hello</li>");
    }

    #[test]
    fn test_list_builder() {
        let mut builder = HtmlElement::builder("ul");
        builder.add_child("li", "hello").add_child("li", "world");

        assert_eq!(
            builder.build().to_string(),
            "<ul>\n  <li>hello</li>\n  <li>world</li>\n</ul>"
        );
    }

    #[test]
    fn test_root_text_and_nesting() {
        let mut inner = HtmlBuilder::new("ol");
        inner.add_child("li", "first");

        let mut outer = HtmlBuilder::new("div");
        outer.text("intro").add_element(inner.build());

        assert_eq!(
            outer.build().render(4),
            "<div>\n    intro\n    <ol>\n        <li>first</li>\n    </ol>\n</div>"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let element = HtmlElement::new("p", "fish & <chips>");
        assert_eq!(element.to_string(), "<p>fish &amp; &lt;chips&gt;</p>");
    }

    #[test]
    fn test_builder_is_reusable() {
        let mut builder = HtmlBuilder::new("ul");
        builder.add_child("li", "one");
        let first = builder.build();

        builder.add_child("li", "two");
        let second = builder.build();

        assert_eq!(first.elements.len(), 1);
        assert_eq!(second.elements.len(), 2);

        builder.clear();
        assert_eq!(builder.build(), HtmlElement::new("ul", ""));
    }

    proptest! {
        #[test]
        fn test_wrap_concatenates(tag in "[a-z]{1,8}", text in ".{0,40}") {
            prop_assert_eq!(wrap(&tag, &text), format!("<{}>{}</{}>", tag, text, tag));
        }
    }
}
