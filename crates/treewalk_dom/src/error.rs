//! DOM error types.

use thiserror::Error;

/// Errors that can occur while building a tree.
#[derive(Debug, Error)]
pub enum DomError {
    /// The document root is not an object node.
    #[error("Invalid root: {0}")]
    InvalidRoot(String),

    /// A node inside the document is malformed.
    #[error("Invalid node at {path}: {message}")]
    InvalidNode {
        /// JSON path of the offending node (e.g. `$.children[1]`).
        path: String,
        /// Error message.
        message: String,
    },

    /// The source is not valid JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DomError {
    /// Creates an invalid root error.
    pub fn invalid_root(message: impl Into<String>) -> Self {
        Self::InvalidRoot(message.into())
    }

    /// Creates an invalid node error.
    pub fn invalid_node(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidNode {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A failure reported by a host tree while it is being read.
///
/// In-memory trees never produce this; trees backed by lazily loaded or
/// remote storage use it to surface access failures to the walker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Host tree access failed: {message}")]
pub struct HostError {
    message: String,
}

impl HostError {
    /// Creates a host error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
