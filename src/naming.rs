//! Declaration names derived from api paths.
use std::fmt;

use crate::ident::upper_first;

pub const DEFAULT_REQUEST_SUFFIX: &str = "ReqDto";
pub const DEFAULT_RESPONSE_SUFFIX: &str = "RespRto";

/// Which side of an api a body describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Request,
    Response,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Request => f.write_str("request"),
            Role::Response => f.write_str("response"),
        }
    }
}

/// Suffixes appended per role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suffixes {
    pub request: String,
    pub response: String,
}

impl Default for Suffixes {
    fn default() -> Self {
        Self {
            request: DEFAULT_REQUEST_SUFFIX.to_string(),
            response: DEFAULT_RESPONSE_SUFFIX.to_string(),
        }
    }
}

impl Suffixes {
    pub fn for_role(&self, role: Role) -> &str {
        match role {
            Role::Request => &self.request,
            Role::Response => &self.response,
        }
    }
}

/// `"/user/get"` + `"ReqDto"` → `"User/getReqDto"`.
///
/// Only the leading separator is dropped; whatever else the path holds is
/// kept verbatim. Two paths differing only in the case of their first letter
/// produce the same name; see `pipeline` for how collisions are handled.
pub fn declaration_name(path: &str, suffix: &str) -> String {
    let stripped = path.strip_prefix('/').unwrap_or(path);
    format!("{}{suffix}", upper_first(stripped))
}
