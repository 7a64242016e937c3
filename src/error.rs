//! Error types.
//!
//! Domain errors are grouped per concern and wrapped by [`Error`].

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Hydration(#[from] HydrationError),

    #[error(transparent)]
    Preferences(#[from] PreferencesError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Failure reported by the backend inside an envelope.
    #[error("backend error: {0}")]
    Backend(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shape mismatches raised by strict hydration.
///
/// Lenient hydration never produces these.
#[derive(Error, Debug)]
pub enum HydrationError {
    #[error("payload is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("missing field `{field}`")]
    MissingField { field: String },

    #[error("field `{field}`: expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl HydrationError {
    /// Dotted path of the offending field, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Parse(_) => None,
            Self::MissingField { field } | Self::TypeMismatch { field, .. } => Some(field),
        }
    }
}

/// Preferences store errors.
#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("unable to determine user config directory")]
    NoConfigDir,

    #[error("invalid key path({0})")]
    InvalidKeyPath(String),

    #[error("failed to read preferences: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write preferences: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to parse preferences: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to serialize preferences: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Errors raised by a [`Transport`](crate::core::transport::Transport) before
/// any payload reaches the hydrator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    #[error("call rejected: {0}")]
    Rejected(String),
}

pub type Result<T> = std::result::Result<T, Error>;
