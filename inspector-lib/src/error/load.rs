//! Input loading errors

/// Error produced while turning external input into inspectable data.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The input is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON is valid but does not have the expected shape.
    #[error("expected {expected}, found {found}")]
    Shape {
        expected: &'static str,
        found: String,
    },
}

impl LoadError {
    /// Creates a new shape error.
    pub fn shape(expected: &'static str, found: impl Into<String>) -> Self {
        Self::Shape {
            expected,
            found: found.into(),
        }
    }
}
