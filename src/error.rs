//! Error types for movie-directors
//!
//! This module provides error handling for the library, including:
//! - Domain-specific error types (fetch, parse, threshold validation)
//! - HTTP status code mapping for API integration
//! - Structured error responses with machine-readable error codes

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Result type alias for movie-directors operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for movie-directors
///
/// Per-page fetch failures are absorbed by the collector (the page degrades
/// to an empty contribution), so most variants here only surface from the
/// page-1 discovery path or the API boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "base_url")
        key: Option<String>,
    },

    /// Network error talking to the catalog service
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The catalog service answered with a non-success HTTP status
    #[error("catalog returned HTTP {status} for page {page}")]
    UpstreamStatus {
        /// The HTTP status code returned by the catalog
        status: u16,
        /// The page that was being fetched
        page: u32,
    },

    /// The catalog page body could not be parsed into the expected envelope
    #[error("failed to parse catalog page {page}: {reason}")]
    Parse {
        /// The page whose body was malformed
        page: u32,
        /// Why parsing failed
        reason: String,
    },

    /// Page 1 could not be fetched, so the total page count is unknowable
    /// and the whole collection fails
    #[error("fatal catalog fetch failure: {0}")]
    FatalFetch(String),

    /// Threshold must be a positive integer; rejected at the API boundary
    /// before the core pipeline runs
    #[error("threshold must be greater than zero, got {value}")]
    InvalidThreshold {
        /// The rejected threshold value
        value: i64,
    },

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// API server error
    #[error("API server error: {0}")]
    ApiServerError(String),
}

/// API error response format
///
/// This structure is returned by API endpoints when an error occurs.
/// It follows a standard format with machine-readable error codes,
/// human-readable messages, and optional contextual details.
///
/// # Example JSON Response
///
/// ```json
/// {
///   "error": {
///     "code": "invalid_threshold",
///     "message": "threshold must be greater than zero, got 0",
///     "details": {
///       "threshold": 0
///     }
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// The error details
    pub error: ErrorDetail,
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "invalid_threshold", "parse_error")
    ///
    /// Clients can use this for programmatic error handling.
    pub code: String,

    /// Human-readable error message
    ///
    /// This is suitable for displaying to end users.
    pub message: String,

    /// Optional additional context about the error
    ///
    /// This can include fields like the rejected threshold or the failing page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Create a new API error with code and message
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details: None,
            },
        }
    }

    /// Create an API error with additional details
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details: Some(details),
            },
        }
    }

    /// Create a "validation error" error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new("validation_error", message)
    }

    /// Create an "internal server error"
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("internal_error", message)
    }
}

/// Convert errors to HTTP status codes for API responses
///
/// This trait maps domain errors to appropriate HTTP status codes.
pub trait ToHttpStatus {
    /// Get the HTTP status code for this error
    fn status_code(&self) -> u16;

    /// Get the machine-readable error code
    fn error_code(&self) -> &str;
}

impl ToHttpStatus for Error {
    fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - Client error (invalid input)
            Error::Config { .. } => 400,
            Error::InvalidThreshold { .. } => 400,

            // 502 Bad Gateway - the catalog service failed us
            Error::Network(_) => 502,
            Error::UpstreamStatus { .. } => 502,
            Error::FatalFetch(_) => 502,

            // 500 Internal Server Error - Server-side issues
            Error::Parse { .. } => 500,
            Error::Serialization(_) => 500,
            Error::Io(_) => 500,
            Error::ApiServerError(_) => 500,
        }
    }

    fn error_code(&self) -> &str {
        match self {
            Error::Config { .. } => "config_error",
            Error::Network(_) => "network_error",
            Error::UpstreamStatus { .. } => "upstream_status",
            Error::Parse { .. } => "parse_error",
            Error::FatalFetch(_) => "fatal_fetch",
            Error::InvalidThreshold { .. } => "invalid_threshold",
            Error::Serialization(_) => "serialization_error",
            Error::Io(_) => "io_error",
            Error::ApiServerError(_) => "api_server_error",
        }
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        let code = error.error_code().to_string();
        let message = error.to_string();

        // Add contextual details for specific error types
        let details = match &error {
            Error::InvalidThreshold { value } => Some(serde_json::json!({
                "threshold": value,
            })),
            Error::UpstreamStatus { status, page } => Some(serde_json::json!({
                "status": status,
                "page": page,
            })),
            Error::Parse { page, .. } => Some(serde_json::json!({
                "page": page,
            })),
            _ => None,
        };

        ApiError {
            error: ErrorDetail {
                code,
                message,
                details,
            },
        }
    }
}
