use thiserror::Error;

/// Main error type for learngraph
#[derive(Error, Debug)]
pub enum LearngraphError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Document root is not a shape the engine can walk
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

/// Convenient Result type using LearngraphError
pub type Result<T> = std::result::Result<T, LearngraphError>;
