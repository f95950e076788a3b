//! Schema primitive names → Go primitive names.
use crate::error::{Error, Result};

/// The fixed schema vocabulary and what each name becomes in a declaration.
///
/// `object` and `array` are listed so they count as registered names; the
/// renderer never prints them because it expands those nodes structurally.
pub const TYPE_TABLE: &[(&str, &str)] = &[
    ("string", "string"),
    ("array", "array"),
    ("object", "object"),
    ("number", "int"),
    ("integer", "int"),
    ("boolean", "bool"),
];

/// Map a schema type name to its target name. Unknown names are fatal.
pub fn convert(schema_type: &str) -> Result<&'static str> {
    TYPE_TABLE
        .iter()
        .find(|(from, _)| *from == schema_type)
        .map(|(_, to)| *to)
        .ok_or_else(|| Error::UnknownType(schema_type.to_string()))
}
