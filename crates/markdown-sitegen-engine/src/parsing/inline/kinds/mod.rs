//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Bold`** / **`Italic`**: `**` and `*` toggle delimiters
//! - **`CodeSpan`**: `` ` `` toggle delimiter, content stays literal
//! - **`Image`** / **`Link`**: `![alt](url)` and `[label](url)` patterns
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.

pub mod code_span;
pub mod emphasis;
pub mod reference;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
pub use reference::{Image, Link};
