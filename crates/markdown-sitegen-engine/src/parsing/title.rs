#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TitleError {
    #[error("No level-1 heading found in the markdown")]
    NoTitleFound,
}

/// Only `# ` counts; `## ` and deeper never match.
const TITLE_MARKER: &str = "# ";

/// Returns the text of the first line starting with `# `, trimmed.
///
/// This scans raw lines, independent of block parsing.
pub fn extract_title(markdown: &str) -> Result<String, TitleError> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix(TITLE_MARKER))
        .map(|title| title.trim().to_string())
        .ok_or(TitleError::NoTitleFound)
}
