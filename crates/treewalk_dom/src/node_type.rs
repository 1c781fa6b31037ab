//! Node type definitions.
//!
//! [`NodeType`] is the concrete DOM node type of the bundled tree.
//! [`NodeKind`] is the coarse discriminant the walker works with.

use serde::{Deserialize, Serialize};

/// The coarse kind of a node, as seen by the walker.
///
/// Only elements and text take part in traversal; every other kind is
/// skipped together with its subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// An element (tag) node.
    Element,
    /// A text node.
    Text,
    /// Anything else: comments, doctypes, documents, processing instructions.
    Other,
}

/// Node types of the in-memory DOM.
///
/// These mirror the W3C DOM node types that commonly occur in markup trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub enum NodeType {
    /// Document container.
    Document,
    /// Element with a tag name, attributes and children.
    Element,
    /// Character data.
    Text,
    /// Comment.
    Comment,
    /// CDATA section.
    #[serde(rename = "cdata")]
    CData,
    /// Processing instruction (`<?target data?>`).
    ProcessingInstruction,
    /// Document type declaration.
    Doctype,
}

impl NodeType {
    /// Returns the walker-facing kind of this node type.
    ///
    /// CDATA sections are character data and walk like text.
    #[inline]
    pub const fn kind(&self) -> NodeKind {
        match self {
            NodeType::Element => NodeKind::Element,
            NodeType::Text | NodeType::CData => NodeKind::Text,
            NodeType::Document
            | NodeType::Comment
            | NodeType::ProcessingInstruction
            | NodeType::Doctype => NodeKind::Other,
        }
    }

    /// Returns true if this node type can contain children.
    #[inline]
    pub const fn is_parent(&self) -> bool {
        matches!(self, NodeType::Document | NodeType::Element)
    }

    /// Returns true if this node type carries a text value.
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(
            self,
            NodeType::Text | NodeType::CData | NodeType::Comment | NodeType::ProcessingInstruction
        )
    }

    /// Returns the DOM `nodeName` used for node types without a tag name.
    #[inline]
    pub const fn default_name(&self) -> &'static str {
        match self {
            NodeType::Document => "#document",
            NodeType::Element => "",
            NodeType::Text => "#text",
            NodeType::Comment => "#comment",
            NodeType::CData => "#cdata-section",
            NodeType::ProcessingInstruction => "",
            NodeType::Doctype => "html",
        }
    }

    /// Looks up a node type by its serialized name.
    pub fn from_name(name: &str) -> Option<Self> {
        let node_type = match name {
            "document" => NodeType::Document,
            "element" => NodeType::Element,
            "text" => NodeType::Text,
            "comment" => NodeType::Comment,
            "cdata" => NodeType::CData,
            "processingInstruction" => NodeType::ProcessingInstruction,
            "doctype" => NodeType::Doctype,
            _ => return None,
        };
        Some(node_type)
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Same spelling as serde serialization
        let name = match self {
            NodeType::Document => "document",
            NodeType::Element => "element",
            NodeType::Text => "text",
            NodeType::Comment => "comment",
            NodeType::CData => "cdata",
            NodeType::ProcessingInstruction => "processingInstruction",
            NodeType::Doctype => "doctype",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(NodeType::Element, NodeKind::Element)]
    #[case(NodeType::Text, NodeKind::Text)]
    #[case(NodeType::CData, NodeKind::Text)]
    #[case(NodeType::Comment, NodeKind::Other)]
    #[case(NodeType::Document, NodeKind::Other)]
    #[case(NodeType::Doctype, NodeKind::Other)]
    #[case(NodeType::ProcessingInstruction, NodeKind::Other)]
    fn test_kind(#[case] node_type: NodeType, #[case] expected: NodeKind) {
        assert_eq!(node_type.kind(), expected);
    }

    #[test]
    fn test_is_parent() {
        assert!(NodeType::Element.is_parent());
        assert!(NodeType::Document.is_parent());
        assert!(!NodeType::Text.is_parent());
        assert!(!NodeType::Comment.is_parent());
    }

    #[test]
    fn test_display_matches_from_name() {
        let types = [
            NodeType::Document,
            NodeType::Element,
            NodeType::Text,
            NodeType::Comment,
            NodeType::CData,
            NodeType::ProcessingInstruction,
            NodeType::Doctype,
        ];

        for node_type in types {
            assert_eq!(NodeType::from_name(&node_type.to_string()), Some(node_type));
        }
    }

    #[test]
    fn test_serde_spelling() {
        let json = serde_json::to_string(&NodeType::CData).unwrap();
        assert_eq!(json, "\"cdata\"");
        let json = serde_json::to_string(&NodeType::ProcessingInstruction).unwrap();
        assert_eq!(json, "\"processingInstruction\"");
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(NodeType::from_name("Element"), None);
        assert_eq!(NodeType::from_name(""), None);
    }
}
