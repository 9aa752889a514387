//! Errors raised while walking data through an adapter

/// Error returned by [`TreeAdapter::children`](crate::tree::TreeAdapter::children).
///
/// The tree view never propagates these: the offending node is rendered
/// with its own label and shown as childless.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    /// The value is being mutated elsewhere and cannot be read right now.
    #[error("{what} is busy and cannot be enumerated")]
    Busy { what: String },

    /// The adapter does not know how to enumerate this value.
    #[error("{what} cannot be enumerated")]
    Unsupported { what: String },
}

impl AdapterError {
    /// Creates a new busy error.
    pub fn busy(what: impl Into<String>) -> Self {
        Self::Busy { what: what.into() }
    }

    /// Creates a new unsupported error.
    pub fn unsupported(what: impl Into<String>) -> Self {
        Self::Unsupported { what: what.into() }
    }
}

/// Error returned by a property accessor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("accessor failed: {message}")]
pub struct AccessError {
    /// Human-readable failure message.
    pub message: String,
}

impl AccessError {
    /// Creates a new accessor error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
