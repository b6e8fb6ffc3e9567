//! Error types for the Philomena client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the Philomena client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Wire Format Errors
    // ============================================================================
    #[error("Response shape mismatch at '{path}': {message}")]
    Shape { path: String, message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Caller Errors
    // ============================================================================
    #[error("Invalid option '{field}': {message}")]
    InvalidOptions { field: String, message: String },

    // ============================================================================
    // Internal Errors
    // ============================================================================
    #[error("Invariant violated: {message}")]
    Invariant { message: String },
}

impl Error {
    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a shape mismatch error
    pub fn shape(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Shape {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid options error
    pub fn invalid_options(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an invariant violation error
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::Invariant {
            message: message.into(),
        }
    }

    /// Check if this error came from the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::HttpStatus { .. } | Error::InvalidUrl(_)
        )
    }
}

/// Result type alias for the Philomena client
pub type Result<T> = std::result::Result<T, Error>;
