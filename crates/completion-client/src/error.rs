//! Error types for the completion client

use std::fmt;

/// Errors that can occur when requesting a completion
#[derive(Debug)]
pub enum CompletionError {
    /// HTTP request failed or the body could not be decoded
    Http(reqwest::Error),
    /// The endpoint answered with a non-success status
    Api { status: u16, message: String },
    /// The response contained no choices
    EmptyResponse,
}

impl fmt::Display for CompletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "Completion HTTP error: {}", e),
            Self::Api { status, message } => {
                write!(f, "Completion API error ({}): {}", status, message)
            }
            Self::EmptyResponse => write!(f, "Completion response contained no choices"),
        }
    }
}

impl std::error::Error for CompletionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CompletionError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

/// Result type for completion operations
pub type Result<T> = std::result::Result<T, CompletionError>;
