pub mod html;
pub mod io;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use html::{Element, Node, NodeError, serialize};
pub use io::{SiteError, copy_static, generate_page, generate_pages_recursive, render_page};
pub use parsing::{ParseError, TitleError, extract_title, markdown_to_html, parse_document};
