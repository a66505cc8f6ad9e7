use std::fmt::{self, Write};

use super::node::{Attributes, Node};

/// Renders a node tree to markup.
///
/// Text and attribute values are written as-is; no entity escaping happens.
pub fn serialize(node: &Node) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_node(&mut out, node);
    out
}

/// Writes a node tree into any [`fmt::Write`] sink.
pub fn write_node<W: Write>(out: &mut W, node: &Node) -> fmt::Result {
    match node {
        Node::Leaf(text) => out.write_str(text),
        Node::Fragment(children) => children.iter().try_for_each(|c| write_node(out, c)),
        Node::Element(el) => {
            write!(out, "<{}", el.tag())?;
            write_attributes(out, el.attributes())?;
            out.write_char('>')?;
            for child in el.children() {
                write_node(out, child)?;
            }
            write!(out, "</{}>", el.tag())
        }
    }
}

fn write_attributes<W: Write>(out: &mut W, attributes: &Attributes) -> fmt::Result {
    for (name, value) in attributes.iter() {
        write!(out, " {name}=\"{value}\"")?;
    }
    Ok(())
}

impl Node {
    pub fn to_html(&self) -> String {
        serialize(self)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::node::Element;

    #[test]
    fn leaf_renders_verbatim() {
        assert_eq!(serialize(&Node::leaf("a < b")), "a < b");
    }

    #[test]
    fn heading_with_text_child() {
        let h1 = Node::element("h1", vec![Node::leaf("Hi")]).unwrap();
        assert_eq!(serialize(&h1), "<h1>Hi</h1>");
    }

    #[test]
    fn fragment_concatenates_children() {
        let frag = Node::Fragment(vec![
            Node::leaf("a"),
            Node::text_element("b", "b").unwrap(),
            Node::leaf("c"),
        ]);
        assert_eq!(serialize(&frag), "a<b>b</b>c");
    }

    #[test]
    fn empty_fragment_renders_nothing() {
        assert_eq!(serialize(&Node::Fragment(vec![])), "");
    }

    #[test]
    fn empty_element_renders_open_and_close() {
        assert_eq!(serialize(&Node::element("div", vec![]).unwrap()), "<div></div>");
    }

    #[test]
    fn attributes_render_in_insertion_order() {
        let img = Element::new("img", vec![Node::leaf("")])
            .unwrap()
            .with_attribute("src", "cat.png")
            .with_attribute("alt", "a cat");
        assert_eq!(
            serialize(&img.into()),
            r#"<img src="cat.png" alt="a cat"></img>"#
        );
    }

    #[test]
    fn attribute_values_are_not_escaped() {
        let a = Element::new("a", vec![Node::leaf("x")])
            .unwrap()
            .with_attribute("href", "a\"b");
        assert_eq!(serialize(&a.into()), "<a href=\"a\"b\">x</a>");
    }

    #[test]
    fn nested_elements() {
        let ul = Node::element(
            "ul",
            vec![
                Node::text_element("li", "one").unwrap(),
                Node::text_element("li", "two").unwrap(),
            ],
        )
        .unwrap();
        assert_eq!(ul.to_html(), "<ul><li>one</li><li>two</li></ul>");
        assert_eq!(ul.to_string(), ul.to_html());
    }
}
