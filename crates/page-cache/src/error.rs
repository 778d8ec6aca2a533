//! Error types for page generation

use std::fmt;

/// Failure reported by a [`PageGenerator`](crate::PageGenerator)
#[derive(Debug)]
pub enum GenerationError {
    /// The generation backend failed (network, bad status, malformed response)
    Backend(String),
    /// The backend answered but produced nothing usable
    EmptyOutput,
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend(msg) => write!(f, "Generation backend error: {}", msg),
            Self::EmptyOutput => write!(f, "Generation produced no content"),
        }
    }
}

impl std::error::Error for GenerationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_display() {
        let err = GenerationError::Backend("connection refused".to_string());
        assert_eq!(
            format!("{}", err),
            "Generation backend error: connection refused"
        );
    }

    #[test]
    fn test_empty_output_display() {
        assert_eq!(
            GenerationError::EmptyOutput.to_string(),
            "Generation produced no content"
        );
    }
}
