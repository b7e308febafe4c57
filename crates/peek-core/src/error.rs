//! Unified error types for peek
//!
//! Every failure class the runner can hit gets its own variant so the terminal
//! diagnostic names the step that failed. There is no recovery anywhere: errors
//! propagate to the process boundary and the run exits non-zero.

use thiserror::Error;

/// Unified error type for all peek operations
#[derive(Error, Debug)]
pub enum PeekError {
    // Session errors
    #[error("Browser launch failed: {0}")]
    Launch(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    // Wait errors
    #[error("Timed out waiting for marker: {marker}")]
    WaitTimeout { marker: String },

    #[error("Element not found: {selector}")]
    ElementNotFound { selector: String },

    // Interaction errors
    #[error("Interaction failed: {0}")]
    Interaction(String),

    // Capture errors
    #[error("Screenshot failed: {0}")]
    Screenshot(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic
    #[error("{0}")]
    Other(String),
}

/// Result type alias using PeekError
pub type Result<T> = std::result::Result<T, PeekError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wait_timeout_names_marker() {
        let err = PeekError::WaitTimeout {
            marker: "CDN Blogger".to_string(),
        };
        assert_eq!(err.to_string(), "Timed out waiting for marker: CDN Blogger");
    }

    #[test]
    fn test_element_not_found_names_selector() {
        let err = PeekError::ElementNotFound {
            selector: "button[aria-label='User menu']".to_string(),
        };
        assert!(err.to_string().contains("button[aria-label='User menu']"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: PeekError = io.into();
        assert!(matches!(err, PeekError::Io(_)));
    }

    #[test]
    fn test_serde_error_conversion() {
        let serde = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: PeekError = serde.into();
        assert!(matches!(err, PeekError::Serialization(_)));
    }
}
