use thiserror::Error;

/// Custom error types for cliprip
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Failed to parse project document: {0}")]
    XmlParse(String),

    #[error("Missing or invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Malformed producer: {0}")]
    MalformedProducer(String),

    #[error("Malformed playlist entry: {0}")]
    MalformedEntry(String),

    #[error("Invalid frame range: {0}")]
    InvalidRange(String),

    #[error("External dependency not found: {0}")]
    DependencyNotFound(String),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] std::io::Error),

    #[error("Failed waiting for command '{0}': {1}")]
    CommandWait(String, #[source] std::io::Error),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for cliprip operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
