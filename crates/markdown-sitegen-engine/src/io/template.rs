use crate::html::serialize;
use crate::parsing::{ParseError, extract_title, parse_document};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Title used when a page has no `# ` heading.
pub const FALLBACK_TITLE: &str = "Untitled";

/// Renders a markdown page into `template`.
///
/// Every `{{ Title }}` and `{{ Content }}` placeholder is replaced. The title
/// placeholder is substituted first, so a title containing the literal text
/// `{{ Content }}` gets the page content too.
pub fn render_page(markdown: &str, template: &str) -> Result<String, ParseError> {
    let content = serialize(&parse_document(markdown)?);
    let title = extract_title(markdown).unwrap_or_else(|_| {
        log::warn!("No level-1 heading found, using \"{FALLBACK_TITLE}\" as title");
        FALLBACK_TITLE.to_string()
    });

    Ok(template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content))
}
