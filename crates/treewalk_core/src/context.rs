//! Traversal context shared by all listeners of a walk.

use crate::{EventBus, TraversalError};

/// An event bus whose listeners receive a [`WalkContext`].
pub type Serializer<N, B> = EventBus<WalkContext<N, B>>;

/// The object handed to every listener during a walk.
///
/// A walker owns exactly one context and mutates it in place between
/// events, so anything a listener stores (typically in [`buffer`]) is seen
/// by every later listener.
///
/// [`buffer`]: WalkContext::buffer
#[derive(Debug, Clone)]
pub struct WalkContext<N, B> {
    /// The node the walk started from.
    pub root_node: N,

    /// The node the current event is about.
    ///
    /// `None` for `start` and `finish`. For `error`, the node that was being
    /// visited when the failure happened.
    pub current_node: Option<N>,

    /// True if `current_node` is the root node.
    pub is_root: bool,

    /// Caller-defined accumulation buffer.
    ///
    /// Unset until a listener assigns it, usually on `start`.
    pub buffer: Option<B>,

    /// The failure being reported. Only set while handling `error`.
    pub error: Option<TraversalError>,
}

impl<N, B> WalkContext<N, B> {
    /// Creates a context for a walk rooted at `root_node`.
    pub fn new(root_node: N) -> Self {
        Self {
            root_node,
            current_node: None,
            is_root: false,
            buffer: None,
            error: None,
        }
    }

    /// Returns the buffer, initializing it with `B::default()` if unset.
    pub fn buffer_mut(&mut self) -> &mut B
    where
        B: Default,
    {
        self.buffer.get_or_insert_with(B::default)
    }

    /// Returns the current node.
    #[inline]
    pub fn current(&self) -> Option<&N> {
        self.current_node.as_ref()
    }
}
