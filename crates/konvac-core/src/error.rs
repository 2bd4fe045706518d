/// Core error types for the konvac compiler.
use std::path::PathBuf;

/// A specialized Result type for konvac operations.
pub type KonvacResult<T> = Result<T, KonvacError>;

/// Top-level error type encompassing all konvac subsystems.
///
/// `Decode` and `Document` are kept apart on purpose: the first means the
/// input text is not well-formed structured data at all, the second means it
/// decoded but does not have the shape of a scene document.
#[derive(Debug, thiserror::Error)]
pub enum KonvacError {
    #[error("malformed input: {0}")]
    Decode(String),

    #[error("invalid scene document: {0}")]
    Document(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("scene not found: {0}")]
    NotFound(String),

    #[error("config error: {message} ({path:?})")]
    Config { message: String, path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl KonvacError {
    /// Create a config error tied to the file it came from.
    pub fn config(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        KonvacError::Config {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Fold a list of validation failures into a single error.
    pub fn from_validation(errors: Vec<KonvacError>) -> Self {
        let joined = errors
            .iter()
            .map(|e| match e {
                KonvacError::Validation(msg) => msg.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join("; ");
        KonvacError::Validation(joined)
    }
}
