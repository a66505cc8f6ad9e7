//! # HTML Node Tree
//!
//! Output model of the parser and its serializer.
//!
//! - **`node`**: `Node` (`Leaf`, `Element`, `Fragment`), `Element`, `Attributes`
//! - **`serializer`**: `serialize()` / `write_node()` rendering to markup
//!
//! An `Element` can only be built with a renderable tag name, so every tree
//! that exists can be serialized; `serialize` is infallible.

pub mod node;
pub mod serializer;

pub use node::{Attributes, Element, Node, NodeError};
pub use serializer::{serialize, write_node};
