//! # Block Parsing
//!
//! Three-phase block parsing over blank-line separated text units.
//!
//! ## Parsing Phases
//!
//! 1. **Splitting** (`split`): The document is cut into blocks at runs of
//!    blank lines; each block is trimmed and empty ones are dropped
//!
//! 2. **Classification** (`classify`): `MarkdownBlockClassifier` assigns each
//!    block a `BlockKind` from the shape of its lines
//!
//! 3. **Assembly** (`assemble`): Each classified block becomes an HTML node
//!    subtree, running the inline tokenizer over its text
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList)
//! - **`split`**: `split_blocks`
//! - **`classify`**: `MarkdownBlockClassifier`
//! - **`assemble`**: `assemble` and the span to node mapping
//!
//! ## Key Invariants
//!
//! - Blocks are independent: no state carries from one block to the next
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - Malformed lists and unclosed fences degrade to paragraphs

pub mod assemble;
pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use assemble::{assemble, span_to_node, text_to_children};
pub use classify::MarkdownBlockClassifier;
pub use split::split_blocks;
pub use types::BlockKind;
