use thiserror::Error;

/// Top-level error type for the HandSign system.
///
/// Errors only surface at the edges: loading configuration, decoding recorded
/// landmark streams and building gesture catalogs. The per-frame recognition
/// path never fails; malformed frames are absorbed as "no hand".
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HandSignError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid landmark frame: expected {expected} points, got {actual}")]
    InvalidFrame { expected: usize, actual: usize },

    #[error("Invalid landmark frame: point {index} is not finite")]
    NonFiniteLandmark { index: usize },

    #[error("Gesture catalog error: {0}")]
    Catalog(String),

    #[error("Replay error at line {line}: {message}")]
    Replay { line: usize, message: String },
}

impl From<toml::de::Error> for HandSignError {
    fn from(err: toml::de::Error) -> Self {
        HandSignError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for HandSignError {
    fn from(err: toml::ser::Error) -> Self {
        HandSignError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for HandSignError {
    fn from(err: serde_json::Error) -> Self {
        HandSignError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for HandSign operations.
pub type Result<T> = std::result::Result<T, HandSignError>;
