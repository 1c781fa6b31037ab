//! Traversal options.

use std::fs;
use std::path::Path;

use jsonc_parser::ParseOptions;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::WalkError;

/// Options controlling which nodes produce events.
///
/// Options are fixed for the lifetime of a walker. Missing fields in a JSON
/// options object take their default values.
///
/// # Example
///
/// ```rust
/// use treewalk_core::WalkOptions;
///
/// let options = WalkOptions::from_json(r#"{ "ignoreWhitespace": true }"#).unwrap();
/// assert_eq!(options, WalkOptions::new().ignore_whitespace(true));
/// assert!(options.ignore_root_node);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct WalkOptions {
    /// Suppress `text` events for text nodes made only of whitespace.
    /// Default: false
    pub ignore_whitespace: bool,
    /// Suppress `tagOpen`/`tagClose` for the root element itself.
    /// Its children are still visited.
    /// Default: true
    pub ignore_root_node: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            ignore_whitespace: false,
            ignore_root_node: true,
        }
    }
}

impl WalkOptions {
    /// Creates options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables whitespace-only text suppression.
    pub fn ignore_whitespace(mut self, yes: bool) -> Self {
        self.ignore_whitespace = yes;
        self
    }

    /// Enables or disables root element suppression.
    pub fn ignore_root_node(mut self, yes: bool) -> Self {
        self.ignore_root_node = yes;
        self
    }

    /// Builds options from an optional JSON value.
    ///
    /// `None` and `null` give the defaults; an object is merged over the
    /// defaults. Anything else fails with an `options` invalid argument.
    pub fn from_value(value: Option<&Value>) -> Result<Self, WalkError> {
        match value {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(value @ Value::Object(_)) => Self::deserialize(value)
                .map_err(|e| WalkError::invalid_argument("options", e.to_string())),
            Some(other) => Err(WalkError::invalid_argument(
                "options",
                format!("expected a literal object, found {}", other),
            )),
        }
    }

    /// Parses options from JSON. Comments and trailing commas are accepted.
    pub fn from_json(json: &str) -> Result<Self, WalkError> {
        let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
            .map_err(|e| WalkError::config(format!("Invalid JSON: {}", e)))?;
        Self::from_value(value.as_ref())
    }

    /// Loads options from a JSON or JSONC file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WalkError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            WalkError::config(format!(
                "Failed to read options from {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let options = WalkOptions::default();
        assert!(!options.ignore_whitespace);
        assert!(options.ignore_root_node);
        assert_eq!(WalkOptions::new(), options);
    }

    #[test]
    fn test_builder_setters() {
        let options = WalkOptions::new()
            .ignore_whitespace(true)
            .ignore_root_node(false);
        assert!(options.ignore_whitespace);
        assert!(!options.ignore_root_node);
    }

    #[test]
    fn test_absent_and_null_are_defaults() {
        assert_eq!(WalkOptions::from_value(None).unwrap(), WalkOptions::default());
        assert_eq!(
            WalkOptions::from_value(Some(&Value::Null)).unwrap(),
            WalkOptions::default()
        );
        assert_eq!(
            WalkOptions::from_value(Some(&json!({}))).unwrap(),
            WalkOptions::default()
        );
    }

    #[test]
    fn test_object_is_merged_over_defaults() {
        let options = WalkOptions::from_value(Some(&json!({ "ignoreRootNode": false }))).unwrap();
        assert!(!options.ignore_whitespace);
        assert!(!options.ignore_root_node);
    }

    #[rstest]
    #[case::number(json!(1))]
    #[case::string(json!("ignoreWhitespace"))]
    #[case::array(json!([true, false]))]
    #[case::boolean(json!(true))]
    #[case::unknown_field(json!({ "ignoreComments": true }))]
    #[case::type_mismatch(json!({ "ignoreWhitespace": "yes" }))]
    fn test_invalid_options(#[case] value: Value) {
        let err = WalkOptions::from_value(Some(&value)).unwrap_err();
        assert_eq!(err.param(), Some("options"));
        assert!(err.to_string().contains("options"));
    }

    #[test]
    fn test_from_json_accepts_comments() {
        let options = WalkOptions::from_json(
            r#"{
                // keep the root element
                "ignoreRootNode": false,
            }"#,
        )
        .unwrap();
        assert!(!options.ignore_root_node);
    }

    #[test]
    fn test_from_json_empty_document() {
        assert_eq!(WalkOptions::from_json("").unwrap(), WalkOptions::default());
    }

    #[test]
    fn test_from_json_syntax_error() {
        let err = WalkOptions::from_json("{ ignoreWhitespace: ").unwrap_err();
        assert!(matches!(err, WalkError::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walk.jsonc");
        fs::write(&path, r#"{ "ignoreWhitespace": true }"#).unwrap();

        let options = WalkOptions::from_file(&path).unwrap();
        assert!(options.ignore_whitespace);
        assert!(options.ignore_root_node);
    }

    #[test]
    fn test_from_missing_file() {
        let err = WalkOptions::from_file("/nonexistent/walk.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read options"));
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let json = serde_json::to_value(WalkOptions::default()).unwrap();
        assert_eq!(
            json,
            json!({ "ignoreWhitespace": false, "ignoreRootNode": true })
        );
    }
}
