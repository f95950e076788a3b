//! Go request/response struct declarations from an exported api document.
//!
//! The document is a list of classifications, each holding apis whose request
//! and response bodies are embedded JSON schema trees. Each body goes through
//! the same steps:
//!
//! ```text
//! bytes ─> schema::unmarshal ─> Api::body ─> norm::normalize ─> codegen ─> text
//!                                              (ident, type_map, naming)
//! ```
//!
//! Every failure is fatal and surfaces as one [`Error`]; there is no partial
//! output.
pub mod cli;
pub mod codegen;
pub mod error;
pub mod field;
pub mod ident;
pub mod naming;
pub mod norm;
pub mod path_de;
pub mod pipeline;
pub mod schema;
pub mod type_map;

pub use error::{Error, Result};
pub use pipeline::{Options, generate};
