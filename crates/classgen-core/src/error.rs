//! Error types for class generation

use thiserror::Error;

/// Result type alias for generation operations
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Error type for generation operations
///
/// Only the fatal paths surface here. Missing or malformed type-conversion and
/// annotation resources never produce an error; they degrade to empty data.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The generation options are not usable
    #[error("usage error: {0}")]
    Usage(String),

    /// A class or property template resource does not exist
    #[error("template not found: {0}")]
    TemplateMissing(String),

    /// A resource exists but could not be read
    #[error("failed to read resource '{resource}': {source}")]
    Io {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    /// A structured resource could not be parsed
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Options could not be parsed from TOML
    #[error("configuration error: {0}")]
    Config(String),
}

impl GenerateError {
    /// Returns a stable numeric code for the error kind
    pub fn error_code(&self) -> u32 {
        match self {
            GenerateError::Usage(_) => 1,
            GenerateError::TemplateMissing(_) => 2,
            GenerateError::Io { .. } => 3,
            GenerateError::Json(_) => 4,
            GenerateError::Config(_) => 5,
        }
    }

    /// Whether the error was caused by the caller's options rather than a resource
    pub fn is_usage(&self) -> bool {
        matches!(self, GenerateError::Usage(_) | GenerateError::Config(_))
    }
}

impl From<toml::de::Error> for GenerateError {
    fn from(err: toml::de::Error) -> Self {
        GenerateError::Config(err.to_string())
    }
}
