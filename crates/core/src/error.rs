//! Error types for Catalog Admin
//!
//! This module provides unified error handling across the console: file
//! selection rejections, transport failures, server-reported failures,
//! configuration problems, and so on.

use thiserror::Error;

/// The main error type for Catalog Admin
#[derive(Debug, Error)]
pub enum ConsoleError {
    // ========================================================================
    // Client-side Rejections
    // ========================================================================
    /// The selected file does not carry the expected extension
    #[error("Please select a CSV file")]
    InvalidFileType(String),

    /// A form value could not be turned into a request
    #[error("Validation error: {0}")]
    Validation(String),

    /// A confirmation is already waiting for an answer
    #[error("Another confirmation is already pending")]
    ConfirmationPending,

    // ========================================================================
    // Network Errors
    // ========================================================================
    /// The request never completed (connection refused, reset, timeout)
    #[error("Request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status
    #[error("API error ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },

    /// A 2xx body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    // ========================================================================
    // IO / Serialization Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Operation cancelled by user
    #[error("Operation cancelled")]
    Cancelled,
}

impl ConsoleError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        ConsoleError::Validation(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        ConsoleError::Transport(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        ConsoleError::Config(msg.into())
    }

    /// Create an API error from a status code and an optional `detail`
    pub fn api(status: u16, detail: Option<String>) -> Self {
        ConsoleError::Api { status, detail }
    }

    /// The server-supplied `detail` message, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ConsoleError::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of a server-reported failure
    pub fn status(&self) -> Option<u16> {
        match self {
            ConsoleError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this is a 404 from the server
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConsoleError::Api { status: 404, .. })
    }

    /// Check if the request never reached a response
    pub fn is_transport(&self) -> bool {
        matches!(self, ConsoleError::Transport(_))
    }

    /// Check if this error was raised before any network call
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            ConsoleError::InvalidFileType(_)
                | ConsoleError::Validation(_)
                | ConsoleError::ConfirmationPending
        )
    }

    /// Message to show the user for a failed action.
    ///
    /// The server's `detail` is used verbatim when present; anything else
    /// falls back to the action's generic message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ConsoleError::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ConsoleError::InvalidFileType(_) | ConsoleError::Validation(_) => self.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Result type alias using ConsoleError
pub type ConsoleResult<T> = Result<T, ConsoleError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ConsoleError::api(400, Some("Product with SKU 'A1' already exists".into()));
        assert_eq!(
            err.to_string(),
            "API error (400): Product with SKU 'A1' already exists"
        );

        let err = ConsoleError::api(500, None);
        assert_eq!(err.to_string(), "API error (500): no detail");
    }

    #[test]
    fn test_user_message_prefers_detail() {
        let err = ConsoleError::api(400, Some("Only CSV files are allowed".into()));
        assert_eq!(err.user_message("Upload failed"), "Only CSV files are allowed");
    }

    #[test]
    fn test_user_message_falls_back() {
        let err = ConsoleError::api(500, None);
        assert_eq!(err.user_message("Operation failed"), "Operation failed");

        let err = ConsoleError::transport("connection refused");
        assert_eq!(err.user_message("Delete failed"), "Delete failed");
    }

    #[test]
    fn test_invalid_file_type_message() {
        let err = ConsoleError::InvalidFileType("notes.txt".into());
        assert_eq!(err.user_message("Upload failed"), "Please select a CSV file");
        assert!(err.is_client_side());
    }

    #[test]
    fn test_classification() {
        let err = ConsoleError::api(404, Some("Product not found".into()));
        assert!(err.is_not_found());
        assert!(!err.is_transport());
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.detail(), Some("Product not found"));

        let err = ConsoleError::transport("timed out");
        assert!(err.is_transport());
        assert_eq!(err.status(), None);
        assert_eq!(err.detail(), None);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ConsoleError = io_err.into();
        assert!(matches!(err, ConsoleError::Io(_)));
    }
}
