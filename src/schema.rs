//! The exported api document: classifications, their apis, and the bodies
//! embedded in them as JSON text.
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::field::Field;
use crate::naming::{Role, Suffixes, declaration_name};

/// A named group of apis.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Kind {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "list", default)]
    pub apis: Vec<Api>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Api {
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub title: String,
    /// Request body schema as embedded JSON text.
    #[serde(rename = "req_body_other", default)]
    pub req_body: Option<String>,
    /// Response body schema as embedded JSON text.
    #[serde(rename = "res_body", default)]
    pub res_body: Option<String>,
}

/// A parsed body tree together with the api it belongs to.
#[derive(Debug, Clone)]
pub struct Body<'a> {
    pub api: &'a Api,
    pub role: Role,
    pub field: Field,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl Api {
    /// The embedded schema text for `role`, or `None` when blank or missing.
    pub fn raw_body(&self, role: Role) -> Option<&str> {
        let raw = match role {
            Role::Request => self.req_body.as_deref(),
            Role::Response => self.res_body.as_deref(),
        };
        raw.map(str::trim).filter(|s| !s.is_empty())
    }

    /// Parse the body for `role`. No schema text means no body.
    pub fn body(&self, role: Role) -> Result<Option<Body<'_>>> {
        self.raw_body(role)
            .map(|raw| {
                Field::parse(raw).map(|field| Body { api: self, role, field })
            })
            .transpose()
    }

    pub fn matches_path(&self, path: Option<&str>) -> bool {
        path.is_none_or(|p| p == self.path)
    }
}

impl Body<'_> {
    pub fn declaration_name(&self, suffixes: &Suffixes) -> String {
        declaration_name(&self.api.path, suffixes.for_role(self.role))
    }
}

/// Parse the document and keep only the kinds named `classification`, if set.
///
/// A filter that keeps nothing is an error listing every kind in the document.
pub fn unmarshal(raw: &[u8], classification: Option<&str>) -> Result<Vec<Kind>> {
    let kinds = crate::path_de::from_slice_with_path::<Vec<Kind>>(raw)
        .map_err(|err| Error::MalformedDocument {
            message: err.to_string(),
            excerpt: err.excerpt(raw),
        })?;
    let Some(wanted) = classification else {
        return Ok(kinds);
    };

    let available = kinds.iter().map(|k| k.name.clone()).collect::<Vec<_>>();
    let kept = kinds.into_iter().filter(|k| k.name == wanted).collect::<Vec<_>>();
    if kept.is_empty() {
        return Err(Error::UnknownClassification { wanted: wanted.to_string(), available });
    }
    tracing::debug!("classification `{wanted}` kept {} of {} kinds", kept.len(), available.len());
    Ok(kept)
}

// ------------------------------- Tests ------------------------------------ //
