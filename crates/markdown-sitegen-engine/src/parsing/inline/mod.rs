//! # Inline Parsing
//!
//! Staged tokenizer turning a block's text into typed [`Span`]s.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the text of
//! inline-eligible blocks (paragraphs, headings, quotes, list items). Code
//! blocks never reach it.
//!
//! Tokenizing starts from one Text span and applies stages in a fixed order,
//! each stage only rewriting spans that are still Text:
//!
//! 1. `**` bold
//! 2. `*` italic
//! 3. `` ` `` code
//! 4. `![alt](url)` images
//! 5. `[label](url)` links
//!
//! ## Modules
//!
//! - **`types`**: `Span` and `SpanKind`
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`parser`**: `tokenize()` main entry point with the per-stage helpers
//!
//! ## Stage Precedence
//!
//! Images are extracted before links: without the `!`, image syntax is link
//! syntax, so the reverse order would produce a `!` Text span followed by a Link.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize;
pub use types::{Span, SpanKind};
