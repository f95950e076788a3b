//! The schema tree: one `Field` per node of a request/response body.
//!
//! Bodies arrive as JSON text shaped like
//! `{type, items?, properties?, description?, required?}` and are read through
//! [`RawField`] before being lifted into the tagged [`Shape`] form.
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub description: String,
    /// Sequence depth. Zero until normalization folds array nodes away.
    pub repeat: usize,
    pub shape: Shape,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Raw schema type name; mapped (and validated) at render time.
    Primitive { ty: String },
    Object(Members),
    /// Element descriptor, `None` when the schema forgot `items`.
    Array { items: Option<Box<Field>> },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Members {
    pub properties: IndexMap<String, Field>,
    pub required: Vec<String>,
}

/// Wire form of a schema node.
#[derive(Debug, Default, Deserialize)]
pub struct RawField {
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub ty: String,
    #[serde(default)]
    pub items: Option<Box<RawField>>,
    #[serde(default, deserialize_with = "null_default")]
    pub properties: IndexMap<String, RawField>,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_default")]
    pub required: Vec<String>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl Field {
    pub fn primitive(ty: impl Into<String>) -> Self {
        Self { description: String::new(), repeat: 0, shape: Shape::Primitive { ty: ty.into() } }
    }
    pub fn object(members: Members) -> Self {
        Self { description: String::new(), repeat: 0, shape: Shape::Object(members) }
    }
    pub fn array(items: Field) -> Self {
        Self { description: String::new(), repeat: 0, shape: Shape::Array { items: Some(Box::new(items)) } }
    }
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Parse an embedded body string into a field tree.
    pub fn parse(raw: &str) -> Result<Self> {
        crate::path_de::from_str_with_path::<RawField>(raw)
            .map(Field::from)
            .map_err(|err| Error::MalformedBody { raw: raw.to_string(), message: err.to_string() })
    }

    pub fn members(&self) -> Option<&Members> {
        match &self.shape {
            Shape::Object(members) => Some(members),
            _ => None,
        }
    }
}

impl Members {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with(mut self, key: impl Into<String>, field: Field) -> Self {
        self.properties.insert(key.into(), field);
        self
    }
    pub fn require(mut self, key: impl Into<String>) -> Self {
        self.required.push(key.into());
        self
    }
    pub fn is_required(&self, key: &str) -> bool {
        self.required.iter().any(|r| r == key)
    }
}

impl From<RawField> for Field {
    fn from(raw: RawField) -> Self {
        let shape = match raw.ty.as_str() {
            "object" => Shape::Object(Members {
                properties: raw
                    .properties
                    .into_iter()
                    .map(|(key, child)| (key, Field::from(child)))
                    .collect(),
                required: raw.required,
            }),
            "array" => Shape::Array { items: raw.items.map(|item| Box::new(Field::from(*item))) },
            _ => Shape::Primitive { ty: raw.ty },
        };
        Field { description: raw.description, repeat: 0, shape }
    }
}

/// Treat an explicit `null` the same as a missing key.
fn null_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(v: serde_json::Value) -> Field {
        Field::parse(&v.to_string()).unwrap()
    }

    #[test]
    fn object_keeps_document_order_and_required() {
        let f = parse(json!({
            "type": "object",
            "properties": {
                "zeta": {"type": "string"},
                "alpha": {"type": "integer", "description": "first"}
            },
            "required": ["alpha"]
        }));
        let m = f.members().unwrap();
        let keys: Vec<_> = m.properties.keys().cloned().collect();
        assert_eq!(keys, ["zeta", "alpha"]);
        assert!(m.is_required("alpha"));
        assert!(!m.is_required("zeta"));
        assert_eq!(m.properties["alpha"].description, "first");
    }

    #[test]
    fn array_keeps_its_element_descriptor() {
        let f = parse(json!({"type": "array", "items": {"type": "string"}}));
        match f.shape {
            Shape::Array { items: Some(item) } => assert_eq!(*item, Field::primitive("string")),
            other => panic!("expected array, got {other:?}"),
        }
    }

    #[test]
    fn missing_and_null_keys_default() {
        let f = parse(json!({"type": "object", "properties": null, "required": null, "description": null}));
        assert_eq!(f, Field::object(Members::new()));
        let g = parse(json!({"description": "untyped"}));
        assert_eq!(g, Field::primitive("").with_description("untyped"));
        let h = parse(json!({"type": "array"}));
        assert_eq!(h.shape, Shape::Array { items: None });
    }

    #[test]
    fn unknown_types_are_kept_for_the_renderer() {
        let f = parse(json!({"type": "date"}));
        assert_eq!(f.shape, Shape::Primitive { ty: "date".into() });
    }

    #[test]
    fn malformed_body_reports_raw_text() {
        match Field::parse("{\"type\": 3}") {
            Err(Error::MalformedBody { raw, message }) => {
                assert_eq!(raw, "{\"type\": 3}");
                assert!(message.contains("type"), "{message}");
            }
            other => panic!("expected MalformedBody, got {other:?}"),
        }
    }
}
