//! Error types for the VelocityDRIVE web gateway

use thiserror::Error;

/// Result type alias using the gateway Error
pub type Result<T> = std::result::Result<T, Error>;

/// Gateway error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Non-zero exit from the tool. Carries trimmed stderr, or the fixed
    /// fallback text when the tool produced none.
    #[error("{0}")]
    Tool(String),

    #[error("mup1cc timeout")]
    Timeout,
}

impl Error {
    pub fn tool_failure(stderr: &str) -> Self {
        let msg = stderr.trim();
        if msg.is_empty() {
            Error::Tool("mup1cc failed".to_string())
        } else {
            Error::Tool(msg.to_string())
        }
    }
}
