//! Cue payload markup: node tree and conceptual DOM
//!
//! Payload text runs through the [`CueTextTokenizer`](crate::tokenizer::CueTextTokenizer),
//! then [`TreeBuilder`] turns the tokens into an arena-backed [`CueTextTree`],
//! and [`build_dom`] projects that tree into [`DomNode`]s.
//!
//! # Example
//!
//! ```rust
//! use vtt_core::parser::cue_text::{build_dom, parse_cue_text, NodeId, NodeKind};
//!
//! let tree = parse_cue_text("<c.yellow>Hello</c> <00:00:02.000>world");
//! assert_eq!(tree.children(NodeId::ROOT).len(), 4);
//!
//! let dom = build_dom(&tree);
//! assert_eq!(dom.text_content(), "Hello world");
//! ```

mod builder;
mod dom;
mod node;

pub use builder::{parse_cue_text, TreeBuilder};
pub use dom::{build_dom, DomNode};
pub use node::{CueTextTree, Node, NodeId, NodeKind, TagKind};
