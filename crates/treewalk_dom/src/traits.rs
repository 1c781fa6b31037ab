//! Host tree trait definition.

use crate::{Attribute, DomNode, HostError, NodeKind};

/// Read-only access to a node of an externally owned tree.
///
/// The walker only ever reads through this trait: it never creates,
/// mutates or destroys nodes. Implementations are cheap handles (a
/// reference, an index, a reference-counted pointer) because the walker
/// clones them onto its traversal stack.
///
/// # Example
///
/// ```rust
/// use treewalk_dom::{HostError, NodeKind, TreeNode};
///
/// /// A node of a flat, index-based tree.
/// #[derive(Clone)]
/// struct Indexed<'t> {
///     tree: &'t [(&'static str, Vec<usize>)],
///     index: usize,
/// }
///
/// impl TreeNode for Indexed<'_> {
///     fn node_kind(&self) -> NodeKind {
///         NodeKind::Element
///     }
///
///     fn node_name(&self) -> &str {
///         self.tree[self.index].0
///     }
///
///     fn text_content(&self) -> Option<&str> {
///         None
///     }
///
///     fn child_nodes(&self) -> Result<Vec<Self>, HostError> {
///         Ok(self.tree[self.index]
///             .1
///             .iter()
///             .map(|&index| Indexed { tree: self.tree, index })
///             .collect())
///     }
///
///     fn is_same_node(&self, other: &Self) -> bool {
///         std::ptr::eq(self.tree, other.tree) && self.index == other.index
///     }
/// }
/// ```
pub trait TreeNode: Clone {
    /// Returns the coarse kind of this node.
    fn node_kind(&self) -> NodeKind;

    /// Returns the node name (the tag name for elements).
    fn node_name(&self) -> &str;

    /// Returns the character data of text nodes.
    fn text_content(&self) -> Option<&str>;

    /// Returns the children in document order.
    ///
    /// Hosts that read lazily report access failures as [`HostError`].
    fn child_nodes(&self) -> Result<Vec<Self>, HostError>;

    /// Returns true if both handles refer to the same node.
    fn is_same_node(&self, other: &Self) -> bool;

    /// Returns the attributes of element nodes.
    ///
    /// Hosts without attribute support can keep the default.
    fn attributes(&self) -> Vec<Attribute<'_>> {
        Vec::new()
    }
}

impl<'a> TreeNode for &'a DomNode<'a> {
    #[inline]
    fn node_kind(&self) -> NodeKind {
        self.node_type.kind()
    }

    #[inline]
    fn node_name(&self) -> &str {
        self.name
    }

    #[inline]
    fn text_content(&self) -> Option<&str> {
        self.value
    }

    fn child_nodes(&self) -> Result<Vec<Self>, HostError> {
        Ok(self.children.iter().collect())
    }

    #[inline]
    fn is_same_node(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }

    fn attributes(&self) -> Vec<Attribute<'_>> {
        self.attributes.to_vec()
    }
}
