//! # treewalk_core
//!
//! Event-driven depth-first walker for markup trees.
//!
//! This crate provides:
//! - [`EventBus`], a publish/subscribe registry with one ordered listener
//!   chain per [`Event`]
//! - [`Walker`], which visits any [`TreeNode`] tree and fires `start`,
//!   `tagOpen`, `text`, `tagClose`, `finish` and `error` on a [`Serializer`]
//! - [`WalkOptions`] for whitespace and root-node filtering
//! - Ready-made listener sets in [`serializers`]
//!
//! The walker never produces output itself. Listeners build it in
//! [`WalkContext::buffer`], which the caller reads back with
//! [`Walker::results`].
//!
//! ## Example
//!
//! ```rust
//! use treewalk_core::{Serializer, WalkOptions, Walker, serializers};
//! use treewalk_dom::DomArena;
//!
//! let arena = DomArena::new();
//! let p = arena.element("p", &[*arena.text("Paragraph")]);
//! let root = arena.element("div", &[*p]);
//!
//! let mut serializer = Serializer::new();
//! serializers::trace(&mut serializer);
//!
//! let mut walker = Walker::new(root, &serializer, WalkOptions::new().ignore_root_node(false));
//! walker.walk()?;
//!
//! assert_eq!(
//!     walker.results().map(String::as_str),
//!     Some("{started}{tag opened: DIV}{tag opened: P}{text: Paragraph}{tag closed: P}{tag closed: DIV}{finished}")
//! );
//! # Ok::<(), treewalk_core::WalkError>(())
//! ```

mod bus;
mod context;
mod error;
mod event;
mod options;
pub mod serializers;
mod walker;

pub use bus::{EventBus, Listener, ListenerResult};
pub use context::{Serializer, WalkContext};
pub use error::{TraversalError, WalkError};
pub use event::Event;
pub use options::WalkOptions;
pub use walker::{Walker, WalkerBuilder};

pub use treewalk_dom::{NodeKind, TreeNode};
