//! JSON tree loading.
//!
//! Trees are described as nested JSON objects:
//!
//! ```json
//! {
//!   "type": "element",
//!   "name": "p",
//!   "attributes": { "class": "lead" },
//!   "children": [
//!     "Hello, ",
//!     { "type": "element", "name": "strong", "children": ["world"] },
//!     { "type": "comment", "value": "greeting" }
//!   ]
//! }
//! ```
//!
//! A bare string inside `children` is shorthand for a text node. When
//! `type` is omitted, an object with a `name` is an element and an object
//! with a `value` is a text node.

use serde_json::{Map, Value};

use crate::{Attribute, DomArena, DomError, DomNode, NodeType};

impl DomArena {
    /// Parses a JSON document and allocates its tree in this arena.
    pub fn load_json_str<'a>(&'a self, source: &str) -> Result<&'a DomNode<'a>, DomError> {
        let value: Value = serde_json::from_str(source)?;
        self.load_json(&value)
    }

    /// Allocates the tree described by `value` in this arena.
    ///
    /// The root must be a JSON object; a string or any other value is
    /// rejected with [`DomError::InvalidRoot`].
    pub fn load_json<'a>(&'a self, value: &Value) -> Result<&'a DomNode<'a>, DomError> {
        let Value::Object(object) = value else {
            return Err(DomError::invalid_root(format!(
                "expected an object, found {}",
                json_type_name(value)
            )));
        };
        let node = self.build_object(object, "$")?;
        Ok(self.alloc(node))
    }

    fn build_node<'a>(&'a self, value: &Value, path: &str) -> Result<DomNode<'a>, DomError> {
        match value {
            Value::String(text) => Ok(DomNode::new_text(NodeType::Text, self.alloc_str(text))),
            Value::Object(object) => self.build_object(object, path),
            other => Err(DomError::invalid_node(
                path,
                format!("expected an object or a string, found {}", json_type_name(other)),
            )),
        }
    }

    fn build_object<'a>(
        &'a self,
        object: &Map<String, Value>,
        path: &str,
    ) -> Result<DomNode<'a>, DomError> {
        let node_type = match object.get("type") {
            Some(Value::String(name)) => NodeType::from_name(name).ok_or_else(|| {
                DomError::invalid_node(path, format!("unknown node type `{}`", name))
            })?,
            Some(other) => {
                return Err(DomError::invalid_node(
                    path,
                    format!("`type` must be a string, found {}", json_type_name(other)),
                ));
            }
            None if object.contains_key("name") => NodeType::Element,
            None if object.contains_key("value") => NodeType::Text,
            None => {
                return Err(DomError::invalid_node(
                    path,
                    "missing `type` and neither `name` nor `value` is present",
                ));
            }
        };

        let name = match (node_type, optional_str(object, "name", path)?) {
            (_, Some(name)) => self.alloc_str(name),
            (NodeType::Element, None) => {
                return Err(DomError::invalid_node(path, "element is missing `name`"));
            }
            (NodeType::ProcessingInstruction, None) => {
                return Err(DomError::invalid_node(
                    path,
                    "processing instruction is missing `name`",
                ));
            }
            (other, None) => other.default_name(),
        };

        let value = match optional_str(object, "value", path)? {
            Some(value) => Some(&*self.alloc_str(value)),
            None if node_type.has_value() => {
                return Err(DomError::invalid_node(
                    path,
                    format!("{} node is missing `value`", node_type),
                ));
            }
            None => None,
        };

        let attributes = match object.get("attributes") {
            None | Some(Value::Null) => &[][..],
            Some(Value::Object(attrs)) if node_type == NodeType::Element => {
                let mut list = Vec::with_capacity(attrs.len());
                for (attr_name, attr_value) in attrs {
                    let Value::String(attr_value) = attr_value else {
                        return Err(DomError::invalid_node(
                            format!("{}.attributes.{}", path, attr_name),
                            "attribute values must be strings",
                        ));
                    };
                    list.push(Attribute::new(
                        self.alloc_str(attr_name),
                        self.alloc_str(attr_value),
                    ));
                }
                self.alloc_slice_copy(&list)
            }
            Some(Value::Object(_)) => {
                return Err(DomError::invalid_node(
                    path,
                    format!("{} node cannot have attributes", node_type),
                ));
            }
            Some(other) => {
                return Err(DomError::invalid_node(
                    path,
                    format!("`attributes` must be an object, found {}", json_type_name(other)),
                ));
            }
        };

        let children = match object.get("children") {
            None | Some(Value::Null) => &[][..],
            Some(Value::Array(items)) if node_type.is_parent() => {
                let mut list = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    let child_path = format!("{}.children[{}]", path, index);
                    list.push(self.build_node(item, &child_path)?);
                }
                self.alloc_slice_copy(&list)
            }
            Some(Value::Array(_)) => {
                return Err(DomError::invalid_node(
                    path,
                    format!("{} node cannot have children", node_type),
                ));
            }
            Some(other) => {
                return Err(DomError::invalid_node(
                    path,
                    format!("`children` must be an array, found {}", json_type_name(other)),
                ));
            }
        };

        Ok(DomNode {
            node_type,
            name,
            value,
            attributes,
            children,
        })
    }
}

fn optional_str<'v>(
    object: &'v Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Option<&'v str>, DomError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(DomError::invalid_node(
            path,
            format!("`{}` must be a string, found {}", key, json_type_name(other)),
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
