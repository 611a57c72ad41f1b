//! Error types for tinted

use thiserror::Error;

/// Result type alias for editor operations
pub type Result<T> = std::result::Result<T, EditorError>;

/// Editor error types
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("bad pattern for tag '{name}': {source}")]
    Pattern {
        name: &'static str,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    #[error("{0}")]
    Message(String),
}
