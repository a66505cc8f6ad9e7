pub mod blocks;
pub mod inline;
pub mod title;

#[cfg(test)]
mod tests;

use crate::html::{Node, NodeError, serialize};

use blocks::{BlockKind, MarkdownBlockClassifier, assemble, split_blocks};

pub use title::{TitleError, extract_title};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to assemble {kind} block {index}: {source}")]
    InvalidBlock {
        index: usize,
        kind: BlockKind,
        source: NodeError,
    },
    #[error("Failed to build document root: {0}")]
    InvalidRoot(NodeError),
}

/// Parses a whole document into a root `div` holding one subtree per block.
pub fn parse_document(markdown: &str) -> Result<Node, ParseError> {
    let classifier = MarkdownBlockClassifier;

    let children = split_blocks(markdown)
        .iter()
        .enumerate()
        .map(|(index, block)| {
            let kind = classifier.classify(block);
            log::trace!("block {index}: {kind}");
            assemble(block, kind).map_err(|source| ParseError::InvalidBlock {
                index,
                kind,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Node::element("div", children).map_err(ParseError::InvalidRoot)
}

/// Convenience: parse then serialize.
pub fn markdown_to_html(markdown: &str) -> Result<String, ParseError> {
    parse_document(markdown).map(|root| serialize(&root))
}
