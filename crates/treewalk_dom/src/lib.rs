//! # treewalk_dom
//!
//! Host tree types for treewalk.
//!
//! The walker in `treewalk_core` never builds trees itself: it reads any tree
//! that implements [`TreeNode`]. This crate defines that trait and ships an
//! in-memory DOM that implements it, so callers without their own DOM can
//! still hand a tree to the walker.
//!
//! ## Architecture
//!
//! - Uses `bumpalo` for arena allocation
//! - All nodes of one tree live in a single [`DomArena`] and are freed together
//! - Node identity is pointer identity within the arena
//! - Trees can be loaded from a small JSON format (see [`DomArena::load_json`])
//!
//! ## Example
//!
//! ```rust
//! use treewalk_dom::{DomArena, NodeKind, TreeNode};
//!
//! let arena = DomArena::new();
//! let text = arena.text("Hello");
//! let p = arena.element("p", &[*text]);
//!
//! assert_eq!(p.node_kind(), NodeKind::Element);
//! assert_eq!(p.node_name(), "p");
//! assert_eq!(p.child_nodes().unwrap().len(), 1);
//! ```

mod arena;
mod error;
mod json;
mod node;
mod node_type;
mod traits;

pub use arena::DomArena;
pub use error::{DomError, HostError};
pub use node::{Attribute, DomNode};
pub use node_type::{NodeKind, NodeType};
pub use traits::TreeNode;
