//! Crate-wide error type.
//!
//! Every condition here is fatal for a run: the generator is all-or-nothing,
//! so callers propagate with `?` and the binary reports once at the top.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The top-level document is not a list of classifications.
    #[error("malformed api document {message}\n--- near ---\n{excerpt}")]
    MalformedDocument { message: String, excerpt: String },

    /// An embedded request/response body is not a valid field tree.
    #[error("malformed body schema {message}\n--- raw body ---\n{raw}")]
    MalformedBody { raw: String, message: String },

    /// A field type outside the fixed vocabulary.
    #[error("unregistered schema type `{0}` (expected one of: string, array, object, number, integer, boolean)")]
    UnknownType(String),

    /// A field name with no usable identifier inside it.
    #[error("illegal field name `{0}`: no identifier characters")]
    IllegalFieldName(String),

    /// An array node without an element descriptor.
    #[error("array field `{at}` has no `items` descriptor")]
    MissingItems { at: String },

    /// Two sibling keys collapse onto the same emitted field name.
    #[error("fields `{first}` and `{second}` under `{at}` both render as `{name}`")]
    DuplicateField {
        at: String,
        name: String,
        first: String,
        second: String,
    },

    /// The classification filter matched nothing.
    #[error("no classification named `{wanted}`; the document has: {}", .available.join(", "))]
    UnknownClassification {
        wanted: String,
        available: Vec<String>,
    },

    /// Two apis derive the same declaration name.
    #[error("declaration `{name}` is generated for both `{first_path}` and `{second_path}`")]
    DuplicateDeclaration {
        name: String,
        first_path: String,
        second_path: String,
    },

    #[error("no input: input file not given and stdin is empty")]
    EmptyInput,

    #[error("i/o error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
