use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Classifies whole blocks by the shape of their lines.
pub struct MarkdownBlockClassifier;

impl MarkdownBlockClassifier {
    /// Assigns a [`BlockKind`] to a block produced by
    /// [`split_blocks`](super::split_blocks).
    ///
    /// Rules are tried in order and the first match wins: heading, code,
    /// quote, unordered list, ordered list, paragraph. Blank lines are
    /// ignored by the line-wise rules.
    pub fn classify(&self, block: &str) -> BlockKind {
        let lines: Vec<&str> = block.lines().collect();

        if let Some(level) = lines.first().and_then(|first| Heading::level(first)) {
            return BlockKind::Heading { level };
        }
        if CodeFence::encloses(&lines) {
            return BlockKind::Code;
        }

        let content: Vec<&str> = lines
            .iter()
            .copied()
            .filter(|line| !line.trim().is_empty())
            .collect();

        if !content.is_empty() && content.iter().all(|line| BlockQuote::is_quote_line(line)) {
            BlockKind::Quote
        } else if UnorderedList::matches(&content) {
            BlockKind::UnorderedList
        } else if OrderedList::matches(&content) {
            BlockKind::OrderedList
        } else {
            BlockKind::Paragraph
        }
    }
}
