use thiserror::Error;

/// Custom error types for connection data resolution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionDataError {
    /// A required property was absent and no default was supplied
    #[error("Missing required configuration: {key} is not defined")]
    MissingConfiguration {
        /// The property key that was not found
        key: String,
    },

    /// A caller-supplied argument was not recognized
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message details
        message: String,
    },

    /// The requested operation is not available for the current state
    #[error("Unsupported operation: {message}")]
    UnsupportedOperation {
        /// Error message details
        message: String,
    },

    /// A value could not be parsed into the requested form
    #[error("Cannot parse '{value}' as {expected}")]
    ParseError {
        /// The offending value
        value: String,
        /// Description of the expected form
        expected: String,
    },
}

/// Result type alias for connection data operations
pub type Result<T> = std::result::Result<T, ConnectionDataError>;
