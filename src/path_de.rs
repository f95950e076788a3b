use std::fmt;

use serde::de::DeserializeOwned;

/// Characters of context kept on each side of a decode error.
const EXCERPT_RADIUS: usize = 40;

/// A decode failure with its JSON path and source position.
#[derive(Debug, Clone)]
pub struct PathError {
    pub path: String,
    pub reason: String,
    /// 1-based; 0 when the decoder reports no position.
    pub line: usize,
    pub column: usize,
}

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, PathError> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(PathError::from)
}

pub fn from_slice_with_path<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, PathError> {
    let de = &mut serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize::<_, T>(de).map_err(PathError::from)
}

impl From<serde_path_to_error::Error<serde_json::Error>> for PathError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        let inner = err.into_inner();
        Self {
            path,
            line: inner.line(),
            column: inner.column(),
            reason: inner.to_string(),
        }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at JSON path {} → {}", self.path, self.reason)
    }
}

impl PathError {
    /// The source text around the error position, on one line.
    pub fn excerpt(&self, src: &[u8]) -> String {
        let text = String::from_utf8_lossy(src);
        let Some(line) = text.lines().nth(self.line.saturating_sub(1)) else {
            return String::new();
        };
        let chars = line.chars().collect::<Vec<_>>();
        let at = self.column.saturating_sub(1).min(chars.len());
        let start = at.saturating_sub(EXCERPT_RADIUS);
        let end = (at + EXCERPT_RADIUS).min(chars.len());
        chars[start..end].iter().collect::<String>().trim().to_string()
    }
}
