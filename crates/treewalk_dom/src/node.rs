//! DomNode definition.
//!
//! The node type of the bundled in-memory DOM.

use serde::Serialize;

use crate::NodeType;

/// A node in the in-memory DOM.
///
/// `DomNode` is designed to be allocated in a [`DomArena`](crate::DomArena).
/// Children are stored inline as an arena slice, so a whole tree is a handful
/// of contiguous allocations.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties this node to its arena allocator,
/// ensuring that all child references remain valid.
///
/// # Example
///
/// ```rust
/// use treewalk_dom::{DomArena, DomNode, NodeType};
///
/// let arena = DomArena::new();
///
/// let text = DomNode::new_text(NodeType::Text, "Hello");
/// let children = arena.alloc_slice_copy(&[text]);
/// let paragraph = DomNode::new_element("p", &[], children);
///
/// assert!(paragraph.has_children());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DomNode<'a> {
    /// The type of this node.
    pub node_type: NodeType,

    /// Tag name for elements, target for processing instructions,
    /// `#text`-style names for the rest.
    pub name: &'a str,

    /// Character data (for text, CDATA, comments, processing instructions).
    pub value: Option<&'a str>,

    /// Element attributes in source order.
    pub attributes: &'a [Attribute<'a>],

    /// Child nodes in document order.
    pub children: &'a [DomNode<'a>],
}

/// A name/value attribute on an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Attribute<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl<'a> Attribute<'a> {
    /// Creates a new attribute.
    #[inline]
    pub const fn new(name: &'a str, value: &'a str) -> Self {
        Self { name, value }
    }
}

impl<'a> Serialize for DomNode<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let has_name = self.has_explicit_name();
        let has_children = self.node_type.is_parent() || !self.children.is_empty();

        let mut len = 1; // type
        if has_name {
            len += 1;
        }
        if self.value.is_some() {
            len += 1;
        }
        if !self.attributes.is_empty() {
            len += 1;
        }
        if has_children {
            len += 1;
        }

        let mut state = serializer.serialize_struct("DomNode", len)?;

        state.serialize_field("type", &self.node_type)?;

        if has_name {
            state.serialize_field("name", self.name)?;
        }

        if let Some(value) = &self.value {
            state.serialize_field("value", value)?;
        }

        if !self.attributes.is_empty() {
            state.serialize_field("attributes", &AttributeMap(self.attributes))?;
        }

        if has_children {
            state.serialize_field("children", &self.children)?;
        }

        state.end()
    }
}

/// Serializes attributes as a JSON object, preserving order.
struct AttributeMap<'a>(&'a [Attribute<'a>]);

impl Serialize for AttributeMap<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for attr in self.0 {
            map.serialize_entry(attr.name, attr.value)?;
        }
        map.end()
    }
}

impl<'a> DomNode<'a> {
    /// Creates a new element node.
    #[inline]
    pub const fn new_element(
        name: &'a str,
        attributes: &'a [Attribute<'a>],
        children: &'a [DomNode<'a>],
    ) -> Self {
        Self {
            node_type: NodeType::Element,
            name,
            value: None,
            attributes,
            children,
        }
    }

    /// Creates a new character data node (text, CDATA or comment).
    #[inline]
    pub const fn new_text(node_type: NodeType, value: &'a str) -> Self {
        Self {
            node_type,
            name: node_type.default_name(),
            value: Some(value),
            attributes: &[],
            children: &[],
        }
    }

    /// Creates a new document node.
    #[inline]
    pub const fn new_document(children: &'a [DomNode<'a>]) -> Self {
        Self {
            node_type: NodeType::Document,
            name: NodeType::Document.default_name(),
            value: None,
            attributes: &[],
            children,
        }
    }

    /// Creates a new leaf node (no children, no value).
    #[inline]
    pub const fn new_leaf(node_type: NodeType, name: &'a str) -> Self {
        Self {
            node_type,
            name,
            value: None,
            attributes: &[],
            children: &[],
        }
    }

    /// Returns true if this node has children.
    #[inline]
    pub const fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns the text value of this node, if any.
    #[inline]
    pub const fn text(&self) -> Option<&'a str> {
        self.value
    }

    /// Looks up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value)
    }

    /// Returns true if `name` differs from the node type's implicit name.
    fn has_explicit_name(&self) -> bool {
        !self.name.is_empty() && self.name != self.node_type.default_name()
    }
}
