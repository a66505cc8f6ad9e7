/// Bullet list using `* ` or `- ` markers.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 2] = ["* ", "- "];

    /// Whether every line uses the same bullet marker.
    pub fn matches(lines: &[&str]) -> bool {
        !lines.is_empty()
            && Self::MARKERS
                .iter()
                .any(|marker| lines.iter().all(|line| line.starts_with(*marker)))
    }

    /// Item text with its bullet marker removed.
    pub fn item_content(line: &str) -> &str {
        Self::MARKERS
            .iter()
            .find_map(|marker| line.strip_prefix(*marker))
            .unwrap_or(line)
            .trim()
    }
}

/// Numbered list `1. `, `2. `, ... counting up from one.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    fn marker(number: usize) -> String {
        format!("{number}{}", Self::SEPARATOR)
    }

    /// Whether line `i` starts with `i + 1` followed by the separator.
    pub fn matches(lines: &[&str]) -> bool {
        !lines.is_empty()
            && lines
                .iter()
                .enumerate()
                .all(|(i, line)| line.starts_with(&Self::marker(i + 1)))
    }

    /// Item text after the first `. `, trimmed.
    pub fn item_content(line: &str) -> &str {
        line.split_once(Self::SEPARATOR)
            .map_or(line, |(_, rest)| rest)
            .trim()
    }
}
