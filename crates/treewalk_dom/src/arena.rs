//! Arena allocator for DOM nodes.
//!
//! Uses `bumpalo` for efficient bump allocation of DOM nodes.
//! All nodes of a single tree are allocated in the same arena,
//! and freed together when the arena is dropped.

use bumpalo::Bump;

use crate::{Attribute, DomNode, NodeType};

/// Arena allocator for DOM nodes.
///
/// This struct wraps `bumpalo::Bump` and adds constructors for the common
/// node shapes, so small trees can be written inline:
///
/// ```rust
/// use treewalk_dom::DomArena;
///
/// let arena = DomArena::new();
///
/// // <div><p><strong>A</strong>B</p></div>
/// let strong = arena.element("strong", &[*arena.text("A")]);
/// let p = arena.element("p", &[*strong, *arena.text("B")]);
/// let div = arena.element("div", &[*p]);
///
/// assert_eq!(div.children[0].children.len(), 2);
/// ```
pub struct DomArena {
    bump: Bump,
}

impl DomArena {
    /// Creates a new arena allocator.
    #[inline]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Creates a new arena with the specified initial capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bump: Bump::with_capacity(capacity),
        }
    }

    /// Allocates a value in the arena and returns a reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Allocates a string slice in the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Allocates a slice in the arena by copying from the input slice.
    #[inline]
    pub fn alloc_slice_copy<T: Copy>(&self, slice: &[T]) -> &[T] {
        self.bump.alloc_slice_copy(slice)
    }

    /// Allocates an element with the given tag name and children.
    pub fn element<'a>(&'a self, name: &str, children: &[DomNode<'a>]) -> &'a DomNode<'a> {
        self.element_with_attributes(name, &[], children)
    }

    /// Allocates an element with attributes and children.
    pub fn element_with_attributes<'a>(
        &'a self,
        name: &str,
        attributes: &[(&str, &str)],
        children: &[DomNode<'a>],
    ) -> &'a DomNode<'a> {
        let name = self.alloc_str(name);
        let attributes: Vec<Attribute<'a>> = attributes
            .iter()
            .map(|(n, v)| Attribute::new(self.alloc_str(n), self.alloc_str(v)))
            .collect();
        let attributes = self.alloc_slice_copy(&attributes);
        let children = self.alloc_slice_copy(children);
        self.alloc(DomNode::new_element(name, attributes, children))
    }

    /// Allocates a text node.
    pub fn text<'a>(&'a self, value: &str) -> &'a DomNode<'a> {
        self.alloc(DomNode::new_text(NodeType::Text, self.alloc_str(value)))
    }

    /// Allocates a comment node.
    pub fn comment<'a>(&'a self, value: &str) -> &'a DomNode<'a> {
        self.alloc(DomNode::new_text(NodeType::Comment, self.alloc_str(value)))
    }

    /// Allocates a document node wrapping the given children.
    pub fn document<'a>(&'a self, children: &[DomNode<'a>]) -> &'a DomNode<'a> {
        self.alloc(DomNode::new_document(self.alloc_slice_copy(children)))
    }

    /// Returns the total bytes allocated in this arena.
    #[inline]
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    /// Resets the arena, deallocating all allocated nodes.
    ///
    /// Note: This does NOT call `Drop` for allocated objects.
    #[inline]
    pub fn reset(&mut self) {
        self.bump.reset();
    }
}

impl Default for DomArena {
    fn default() -> Self {
        Self::new()
    }
}
