//! One generation run: document bytes in, declaration texts out.
use std::collections::HashMap;

use serde::Serialize;

use crate::codegen;
use crate::error::{Error, Result};
use crate::field::Field;
use crate::naming::{Role, Suffixes};
use crate::norm;
use crate::schema::{self, Api, Kind};

/// Selection and naming knobs for a run.
#[derive(Debug, Clone)]
pub struct Options {
    /// Keep only the classification with this exact name.
    pub classification: Option<String>,
    /// Keep only the api with this exact path.
    pub path: Option<String>,
    pub suffixes: Suffixes,
    /// Fail when two bodies derive the same declaration name.
    pub reject_duplicate_names: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            classification: None,
            path: None,
            suffixes: Suffixes::default(),
            reject_duplicate_names: true,
        }
    }
}

/// A rendered body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub api_path: String,
    pub role: Role,
    pub text: String,
}

/// A normalized body tree, listed rather than keyed so duplicates stay visible.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedTree {
    pub name: String,
    pub api_path: String,
    pub tree: Field,
}

const ROLES: [Role; 2] = [Role::Request, Role::Response];

// ————————————————————————————————————————————————————————————————————————————
// RUN
// ————————————————————————————————————————————————————————————————————————————

/// Render every selected body, request before response, in document order.
pub fn declarations(raw: &[u8], options: &Options) -> Result<Vec<Declaration>> {
    let kinds = schema::unmarshal(raw, options.classification.as_deref())?;
    let mut names = NameLedger::default();
    let mut out = Vec::new();

    for api in selected_apis(&kinds, options) {
        for role in ROLES {
            let Some(body) = api.body(role)? else {
                tracing::debug!(path = %api.path, %role, "no schema, skipping");
                continue;
            };
            let name = body.declaration_name(&options.suffixes);
            names.claim(&name, &api.path, options.reject_duplicate_names)?;
            let text = codegen::render(body, &options.suffixes)?;
            tracing::debug!(path = %api.path, %role, "rendered {name}");
            out.push(Declaration { name, api_path: api.path.clone(), role, text });
        }
    }

    tracing::info!("rendered {} declarations", out.len());
    Ok(out)
}

/// Declaration texts only.
pub fn generate(raw: &[u8], options: &Options) -> Result<Vec<String>> {
    Ok(declarations(raw, options)?.into_iter().map(|d| d.text).collect())
}

/// Each declaration followed by a blank line, ready to write out.
pub fn join_output(texts: &[String]) -> String {
    let mut out = String::new();
    for text in texts {
        out.push_str(text);
        out.push_str("\n\n");
    }
    out
}

/// The selected kinds with their apis narrowed by the path filter.
pub fn inventory(raw: &[u8], options: &Options) -> Result<Vec<Kind>> {
    let mut kinds = schema::unmarshal(raw, options.classification.as_deref())?;
    for kind in &mut kinds {
        kind.apis.retain(|api| api.matches_path(options.path.as_deref()));
    }
    Ok(kinds)
}

/// Normalized body trees with their declaration names, for inspection.
///
/// Name collisions are handled exactly as in [`declarations`].
pub fn trees(raw: &[u8], options: &Options) -> Result<Vec<NamedTree>> {
    let kinds = schema::unmarshal(raw, options.classification.as_deref())?;
    let mut names = NameLedger::default();
    let mut out = Vec::new();
    for api in selected_apis(&kinds, options) {
        for role in ROLES {
            if let Some(body) = api.body(role)? {
                let name = body.declaration_name(&options.suffixes);
                names.claim(&name, &api.path, options.reject_duplicate_names)?;
                out.push(NamedTree { name, api_path: api.path.clone(), tree: norm::normalized(body.field)? });
            }
        }
    }
    Ok(out)
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// Declaration names handed out so far, with the api path that took each.
#[derive(Debug, Default)]
struct NameLedger {
    taken: HashMap<String, String>,
}

impl NameLedger {
    /// Record `name` for `path`; a repeat is fatal when `reject` is set.
    fn claim(&mut self, name: &str, path: &str, reject: bool) -> Result<()> {
        let Some(first_path) = self.taken.insert(name.to_string(), path.to_string()) else {
            return Ok(());
        };
        if reject {
            return Err(Error::DuplicateDeclaration {
                name: name.to_string(),
                first_path,
                second_path: path.to_string(),
            });
        }
        tracing::warn!("declaration `{name}` emitted again for `{path}`");
        Ok(())
    }
}

fn selected_apis<'a>(kinds: &'a [Kind], options: &'a Options) -> impl Iterator<Item = &'a Api> {
    kinds
        .iter()
        .flat_map(|kind| kind.apis.iter())
        .filter(|api| api.matches_path(options.path.as_deref()))
}

// ------------------------------- Tests ------------------------------------ //
