use std::fmt;

/// Structural kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `#` to `######` heading.
    Heading {
        /// Number of leading `#` characters (1-6).
        level: u8,
    },
    /// Block fenced by ``` lines; content is never parsed.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with the same `* ` or `- ` marker.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... in order.
    OrderedList,
    /// A paragraph block (default when no other kind matches).
    Paragraph,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Heading { level } => write!(f, "heading (level {level})"),
            BlockKind::Code => f.write_str("code"),
            BlockKind::Quote => f.write_str("quote"),
            BlockKind::UnorderedList => f.write_str("unordered list"),
            BlockKind::OrderedList => f.write_str("ordered list"),
            BlockKind::Paragraph => f.write_str("paragraph"),
        }
    }
}
