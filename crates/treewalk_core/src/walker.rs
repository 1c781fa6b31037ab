//! Depth-first tree walker.
//!
//! The walker visits a host tree in document order and fires one event per
//! step through a [`Serializer`]. It performs no transformation itself: all
//! output is produced by listeners writing into the context buffer.
//!
//! # Example
//!
//! ```rust
//! use treewalk_core::{Event, Serializer, WalkContext, WalkOptions, Walker};
//! use treewalk_dom::{DomArena, DomNode, TreeNode};
//!
//! type Ctx<'a> = WalkContext<&'a DomNode<'a>, String>;
//!
//! let arena = DomArena::new();
//! let strong = arena.element("STRONG", &[*arena.text("HTMLParser")]);
//! let p = arena.element("P", &[*arena.text("Hello, "), *strong, *arena.text("!")]);
//! let wrapper = arena.element("DIV", &[*p]);
//!
//! let mut serializer = Serializer::new();
//! serializer.on(Event::TagOpen, |ctx: &mut Ctx<'_>| {
//!     let name = ctx.current().map(|n| n.node_name().to_string()).unwrap_or_default();
//!     ctx.buffer_mut().push_str(&format!("<{}>", name));
//!     Ok(())
//! });
//! serializer.on(Event::Text, |ctx: &mut Ctx<'_>| {
//!     let text = ctx.current().and_then(|n| n.text_content()).unwrap_or_default().to_string();
//!     ctx.buffer_mut().push_str(&text);
//!     Ok(())
//! });
//!
//! let mut walker = Walker::new(wrapper, &serializer, WalkOptions::default());
//! walker.walk().unwrap();
//! assert_eq!(walker.results().map(String::as_str), Some("<P>Hello, <STRONG>HTMLParser!"));
//! ```

use tracing::{debug, trace};
use treewalk_dom::{NodeKind, TreeNode};

use crate::{Event, Serializer, TraversalError, WalkContext, WalkError, WalkOptions};

/// Returns true for non-empty text made only of whitespace.
fn is_whitespace_only(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_markup_whitespace)
}

/// Unicode whitespace plus the byte order mark, minus NEXT LINE (U+0085).
fn is_markup_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c != '\u{85}' && c.is_whitespace())
}

/// Walks a host tree and reports each step to a [`Serializer`].
///
/// `N` is the node handle type, `B` the buffer type listeners accumulate
/// into. The walker owns one [`WalkContext`] for its whole lifetime, so the
/// buffer survives between walks unless a `start` listener resets it.
pub struct Walker<'b, N, B> {
    serializer: &'b Serializer<N, B>,
    options: WalkOptions,
    context: WalkContext<N, B>,
    /// Nodes entered and not yet left. Left untouched on failure so the
    /// `error` event sees the node that failed.
    stack: Vec<N>,
}

impl<'b, N: TreeNode, B> Walker<'b, N, B> {
    /// Creates a walker for the tree rooted at `root`.
    pub fn new(root: N, serializer: &'b Serializer<N, B>, options: WalkOptions) -> Self {
        Self {
            serializer,
            options,
            context: WalkContext::new(root),
            stack: Vec::new(),
        }
    }

    /// Creates a walker with default options.
    pub fn with_defaults(root: N, serializer: &'b Serializer<N, B>) -> Self {
        Self::new(root, serializer, WalkOptions::default())
    }

    /// Returns a builder that validates its inputs.
    pub fn builder() -> WalkerBuilder<'b, N, B> {
        WalkerBuilder::default()
    }

    /// Walks the whole tree once.
    ///
    /// Fires `start`, then `tagOpen`/`text`/`tagClose` in document order,
    /// then `finish`. If any step fails the remaining events are skipped and
    /// `error` fires instead. The walk succeeds if an `error` listener ran;
    /// otherwise the failure is returned.
    pub fn walk(&mut self) -> Result<(), WalkError> {
        self.stack.clear();
        self.context.error = None;
        debug!(
            "Walking tree from <{}> ({:?})",
            self.context.root_node.node_name(),
            self.options
        );

        let result = match self.run() {
            Ok(()) => {
                debug!("Walk finished");
                Ok(())
            }
            Err(err) => self.handle_error(err),
        };

        self.stack.clear();
        result
    }

    fn run(&mut self) -> Result<(), TraversalError> {
        self.fire(Event::Start)?;
        let root = self.context.root_node.clone();
        self.visit(root)?;
        self.fire(Event::Finish)?;
        Ok(())
    }

    fn visit(&mut self, node: N) -> Result<(), TraversalError> {
        self.stack.push(node.clone());

        match node.node_kind() {
            NodeKind::Text => {
                let text = node.text_content().unwrap_or_default();
                if self.options.ignore_whitespace && is_whitespace_only(text) {
                    trace!("Skipping whitespace-only text");
                } else {
                    self.fire(Event::Text)?;
                }
            }
            NodeKind::Element => {
                let emit = !(self.options.ignore_root_node
                    && node.is_same_node(&self.context.root_node));

                if emit {
                    self.fire(Event::TagOpen)?;
                }
                for child in node.child_nodes()? {
                    self.visit(child)?;
                }
                if emit {
                    self.fire(Event::TagClose)?;
                }
            }
            NodeKind::Other => {
                trace!("Skipping <{}> and its children", node.node_name());
            }
        }

        self.stack.pop();
        Ok(())
    }

    /// Points the context at the innermost open node and fires `event`.
    fn fire(&mut self, event: Event) -> Result<bool, TraversalError> {
        let current = self.stack.last().cloned();
        self.context.is_root = current
            .as_ref()
            .is_some_and(|node| node.is_same_node(&self.context.root_node));
        self.context.current_node = current;

        trace!(
            "Firing {} on {:?}",
            event,
            self.context.current_node.as_ref().map(|n| n.node_name())
        );
        self.serializer.fire(event, &mut self.context)
    }

    fn handle_error(&mut self, err: TraversalError) -> Result<(), WalkError> {
        self.context.error = Some(err.clone());

        match self.fire(Event::Error) {
            Ok(true) => {
                debug!("Walk error handled by listeners: {}", err);
                Ok(())
            }
            Ok(false) => {
                debug!("Unhandled walk error: {}", err);
                Err(err.into())
            }
            Err(listener_err) => {
                debug!("Error listener failed while handling '{}': {}", err, listener_err);
                Err(listener_err.into())
            }
        }
    }

    /// Returns the buffer built by the listeners, if any listener set it.
    pub fn results(&self) -> Option<&B> {
        self.context.buffer.as_ref()
    }

    /// Consumes the walker and returns the buffer.
    pub fn into_results(self) -> Option<B> {
        self.context.buffer
    }

    /// Returns the traversal context.
    pub fn context(&self) -> &WalkContext<N, B> {
        &self.context
    }

    /// Returns the options this walker was created with.
    pub fn options(&self) -> WalkOptions {
        self.options
    }

    /// Returns the root node.
    pub fn root(&self) -> &N {
        &self.context.root_node
    }
}

/// Builder for [`Walker`] that reports missing inputs as errors.
pub struct WalkerBuilder<'b, N, B> {
    root: Option<N>,
    serializer: Option<&'b Serializer<N, B>>,
    options: Option<WalkOptions>,
}

impl<N, B> Default for WalkerBuilder<'_, N, B> {
    fn default() -> Self {
        Self {
            root: None,
            serializer: None,
            options: None,
        }
    }
}

impl<'b, N: TreeNode, B> WalkerBuilder<'b, N, B> {
    /// Sets the root node.
    pub fn root(mut self, root: N) -> Self {
        self.root = Some(root);
        self
    }

    /// Sets the event bus.
    pub fn serializer(mut self, serializer: &'b Serializer<N, B>) -> Self {
        self.serializer = Some(serializer);
        self
    }

    /// Sets the options. Defaults apply when never called.
    pub fn options(mut self, options: WalkOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Builds the walker.
    ///
    /// Fails with an invalid argument naming `root` or `serializer` when
    /// either is missing.
    pub fn build(self) -> Result<Walker<'b, N, B>, WalkError> {
        let root = self
            .root
            .ok_or_else(|| WalkError::invalid_argument("root", "a root node is required"))?;
        let serializer = self.serializer.ok_or_else(|| {
            WalkError::invalid_argument("serializer", "an event bus is required")
        })?;
        Ok(Walker::new(root, serializer, self.options.unwrap_or_default()))
    }
}
