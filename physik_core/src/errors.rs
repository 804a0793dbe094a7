//! # Error Types
//!
//! Structured error types for physik_core. Each variant corresponds to one
//! class of the API error taxonomy and knows its HTTP status code, so a
//! transport layer can translate errors mechanically.
//!
//! User-facing messages are carried verbatim (German, matching the original
//! service) and serialize to the wire shape `{"message": "..."}`.
//!
//! ## Example
//!
//! ```rust
//! use physik_core::errors::{ApiError, ApiResult};
//!
//! fn require_field(value: &str) -> ApiResult<()> {
//!     if value.is_empty() {
//!         return Err(ApiError::bad_request("Alle Felder müssen ausgefüllt werden"));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(require_field("").unwrap_err().status_code(), 400);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for physik_core operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Structured error type for API operations.
///
/// Note that "Unsolvable" is deliberately absent: the solver finding no
/// applicable variant is an expected outcome and is modeled as `Ok(None)`,
/// not as an error.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ApiError {
    /// A required field is missing or a supplied value is unusable
    #[error("{message}")]
    BadRequest { message: String },

    /// The addressed resource does not exist
    #[error("{message}")]
    NotFound { message: String },

    /// No valid session, or the supplied credentials are wrong
    #[error("{message}")]
    Unauthorized { message: String },

    /// The operation collides with existing state (duplicate username, duplicate favorite)
    #[error("{message}")]
    Conflict { message: String },

    /// Unexpected internal failure (should be rare)
    #[error("Interner Fehler: {message}")]
    Internal { message: String },
}

impl ApiError {
    /// Create a BadRequest error
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest { message: message.into() }
    }

    /// Create a NotFound error
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound { message: message.into() }
    }

    /// Create an Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized { message: message.into() }
    }

    /// Create a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict { message: message.into() }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal { message: message.into() }
    }

    /// HTTP status code this error translates to.
    ///
    /// Conflicts map to 400 rather than 409: the original service reported
    /// duplicate usernames and duplicate favorites as 400, and the endpoint
    /// contract preserves that.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest { .. } => 400,
            ApiError::Conflict { .. } => 400,
            ApiError::Unauthorized { .. } => 401,
            ApiError::NotFound { .. } => 404,
            ApiError::Internal { .. } => 500,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest { .. } => "BAD_REQUEST",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Unauthorized { .. } => "UNAUTHORIZED",
            ApiError::Conflict { .. } => "CONFLICT",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// The JSON body a transport layer should send for this error.
    ///
    /// All non-2xx responses share the shape `{"message": string}`.
    pub fn to_body(&self) -> serde_json::Value {
        serde_json::json!({ "message": self.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ApiError::not_found("Formel nicht gefunden");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: ApiError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::bad_request("x").status_code(), 400);
        assert_eq!(ApiError::conflict("x").status_code(), 400);
        assert_eq!(ApiError::unauthorized("x").status_code(), 401);
        assert_eq!(ApiError::not_found("x").status_code(), 404);
        assert_eq!(ApiError::internal("x").status_code(), 500);
    }

    #[test]
    fn test_error_body_shape() {
        let body = ApiError::unauthorized("Nicht angemeldet").to_body();
        assert_eq!(body["message"], "Nicht angemeldet");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ApiError::conflict("x").error_code(), "CONFLICT");
        assert_eq!(ApiError::not_found("x").error_code(), "NOT_FOUND");
    }
}
