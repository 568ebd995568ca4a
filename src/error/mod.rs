//! Error types for environment-variable to JSON conversion

use std::path::PathBuf;

/// Main error type for conversion operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The input string had zero length. The converter still produces the
    /// empty-array payload alongside this error; callers that only care
    /// about the JSON text may ignore it.
    #[error("input is empty")]
    EmptyInput,

    #[error("JSON encoding error: {message}")]
    Encode { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },
}

impl ConvertError {
    pub fn encode(message: String) -> Self {
        Self::Encode { message }
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyInput => "input is empty".to_string(),
            Self::Encode { message } => format!("JSON encoding error: {}", message),
            Self::Io { message, path } => match path {
                Some(path) => format!("IO error for {}: {}", path.display(), message),
                None => format!("IO error: {}", message),
            },
        }
    }
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
