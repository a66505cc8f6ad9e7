use crate::{
    html::{Element, Node, NodeError},
    parsing::inline::{Span, SpanKind, tokenize},
};

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Builds the node subtree for one classified block.
pub fn assemble(block: &str, kind: BlockKind) -> Result<Node, NodeError> {
    match kind {
        BlockKind::Heading { level } => Node::element(
            format!("h{level}"),
            text_to_children(Heading::content(block, level))?,
        ),
        BlockKind::Code => {
            let code = Node::text_element("code", CodeFence::content(block))?;
            Node::element("pre", vec![code])
        }
        BlockKind::Quote => {
            let text = block
                .lines()
                .map(BlockQuote::content)
                .collect::<Vec<_>>()
                .join("\n");
            Node::element("blockquote", text_to_children(&text)?)
        }
        BlockKind::UnorderedList => list("ul", block, UnorderedList::item_content),
        BlockKind::OrderedList => list("ol", block, OrderedList::item_content),
        BlockKind::Paragraph => Node::element("p", text_to_children(block)?),
    }
}

fn list(tag: &str, block: &str, item_content: fn(&str) -> &str) -> Result<Node, NodeError> {
    let items = block
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| Node::element("li", text_to_children(item_content(line))?))
        .collect::<Result<Vec<_>, _>>()?;
    Node::element(tag, items)
}

/// Tokenizes inline text and maps each span to a node.
pub fn text_to_children(text: &str) -> Result<Vec<Node>, NodeError> {
    tokenize(text).into_iter().map(span_to_node).collect()
}

/// Maps a single [`Span`] to its HTML node.
pub fn span_to_node(span: Span) -> Result<Node, NodeError> {
    let url = span.url.unwrap_or_default();
    match span.kind {
        SpanKind::Text => Ok(Node::Leaf(span.text)),
        SpanKind::Bold => Node::text_element("b", span.text),
        SpanKind::Italic => Node::text_element("i", span.text),
        SpanKind::Code => Node::text_element("code", span.text),
        SpanKind::Link => Ok(Element::new("a", vec![Node::Leaf(span.text)])?
            .with_attribute("href", url)
            .into()),
        SpanKind::Image => Ok(Element::new("img", vec![Node::leaf("")])?
            .with_attribute("src", url)
            .with_attribute("alt", span.text)
            .into()),
    }
}
