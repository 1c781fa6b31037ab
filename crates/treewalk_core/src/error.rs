//! Walker error types.

use thiserror::Error;
use treewalk_dom::{DomError, HostError};

/// Errors raised while a walk is in progress.
///
/// These are the errors routed through the `error` event. They are cheap to
/// clone because the walker keeps a copy in the traversal context while the
/// original travels back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraversalError {
    /// A listener aborted the walk.
    #[error("Listener failed: {0}")]
    Listener(String),

    /// The host tree could not be read.
    #[error(transparent)]
    Host(#[from] HostError),
}

impl TraversalError {
    /// Creates a listener error.
    pub fn listener(message: impl Into<String>) -> Self {
        Self::Listener(message.into())
    }

    /// Creates a host access error.
    pub fn host(message: impl Into<String>) -> Self {
        Self::Host(HostError::new(message))
    }
}

/// Errors returned by the event bus and the walker.
#[derive(Debug, Error)]
pub enum WalkError {
    /// A caller passed a malformed argument. Never caught internally.
    #[error("Invalid argument `{param}`: {message}")]
    InvalidArgument {
        /// Name of the offending parameter.
        param: &'static str,
        /// Error message.
        message: String,
    },

    /// A walk failed and no `error` listener handled it.
    #[error("Traversal error: {0}")]
    Traversal(#[from] TraversalError),

    /// Options could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The tree could not be built.
    #[error("Tree error: {0}")]
    Dom(DomError),
}

impl WalkError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(param: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param,
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns the parameter name of an invalid argument error.
    pub fn param(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { param, .. } => Some(param),
            _ => None,
        }
    }
}

impl From<DomError> for WalkError {
    fn from(err: DomError) -> Self {
        match err {
            DomError::InvalidRoot(message) => Self::invalid_argument("root", message),
            other => Self::Dom(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_names_the_parameter() {
        let err = WalkError::invalid_argument("eventName", "not supported");
        assert_eq!(err.param(), Some("eventName"));
        assert_eq!(
            err.to_string(),
            "Invalid argument `eventName`: not supported"
        );
    }

    #[test]
    fn traversal_error_keeps_listener_message() {
        let err = WalkError::from(TraversalError::listener("RAISED BY ME!"));
        assert!(err.to_string().contains("RAISED BY ME!"));
        assert_eq!(err.param(), None);
    }

    #[test]
    fn host_error_is_transparent() {
        let err = TraversalError::host("disk gone");
        assert_eq!(err.to_string(), "Host tree access failed: disk gone");
    }

    #[test]
    fn invalid_root_maps_to_invalid_argument() {
        let err = WalkError::from(DomError::invalid_root("expected an object"));
        assert_eq!(err.param(), Some("root"));
    }

    #[test]
    fn other_dom_errors_are_wrapped() {
        let err = WalkError::from(DomError::invalid_node("$", "bad"));
        assert!(matches!(err, WalkError::Dom(_)));
    }
}
