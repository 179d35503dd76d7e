//! Error types for noisetext operations.
//!
//! Every fallible operation in the crate returns [`Result`], and every
//! failure surfaces directly to the caller. Nothing is retried or masked.

use std::fmt;
use std::path::Path;

/// Main error type for noisetext operations.
///
/// # Examples
///
/// ```
/// use noisetext::error::NoiseTextError;
///
/// let err = NoiseTextError::InvalidArgument {
///     param: "noise_level".to_string(),
///     value: "1.5".to_string(),
///     constraint: "sample size <= population (12)".to_string(),
/// };
/// assert!(err.to_string().contains("noise_level"));
/// ```
#[derive(Debug)]
pub enum NoiseTextError {
    /// An argument is outside the domain the operation accepts.
    InvalidArgument {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// A linguistic resource (stopword list, WordNet file) is missing or unreadable.
    ResourceUnavailable {
        /// Resource name (e.g. "stopwords/english", "wordnet/index.noun")
        resource: String,
        /// Location that was searched
        path: String,
    },

    /// Code-point arithmetic produced a value that is not a Unicode scalar value.
    RangeOverflow {
        /// Character position in the input text
        position: usize,
        /// Resulting code point before conversion
        code_point: i64,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Serialization/deserialization error.
    Serialization(String),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for NoiseTextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoiseTextError::InvalidArgument {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid argument: {param} = {value}, expected {constraint}"
                )
            }
            NoiseTextError::ResourceUnavailable { resource, path } => {
                write!(f, "Resource unavailable: {resource} (searched {path})")
            }
            NoiseTextError::RangeOverflow {
                position,
                code_point,
            } => {
                write!(
                    f,
                    "Code point out of range at position {position}: {code_point} is not a Unicode scalar value"
                )
            }
            NoiseTextError::Io(e) => write!(f, "I/O error: {e}"),
            NoiseTextError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            NoiseTextError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for NoiseTextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NoiseTextError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NoiseTextError {
    fn from(err: std::io::Error) -> Self {
        NoiseTextError::Io(err)
    }
}

impl From<serde_json::Error> for NoiseTextError {
    fn from(err: serde_json::Error) -> Self {
        NoiseTextError::Serialization(err.to_string())
    }
}

impl From<&str> for NoiseTextError {
    fn from(msg: &str) -> Self {
        NoiseTextError::Other(msg.to_string())
    }
}

impl From<String> for NoiseTextError {
    fn from(msg: String) -> Self {
        NoiseTextError::Other(msg)
    }
}

impl NoiseTextError {
    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument(
        param: &str,
        value: impl fmt::Display,
        constraint: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.into(),
        }
    }

    /// Create a resource unavailable error for a file or directory.
    #[must_use]
    pub fn resource_unavailable(resource: &str, path: &Path) -> Self {
        Self::ResourceUnavailable {
            resource: resource.to_string(),
            path: path.display().to_string(),
        }
    }

    /// Whether this error is an [`NoiseTextError::InvalidArgument`].
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, NoiseTextError>;
