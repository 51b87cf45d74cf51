/**
 * Backend Error Types
 *
 * This module defines the error types returned by HTTP handlers.
 *
 * # Error Categories
 *
 * - `NotFound` - A ticket or aggregate referenced by a write path does not
 *   exist. Read paths for collections return empty lists instead of this.
 * - `InvalidInput` - A malformed identifier or payload field, rejected
 *   before the store is touched.
 * - `Serialization` - JSON encoding failed while building a response.
 *
 * Push-channel delivery failures never surface here: a failed push to one
 * subscriber is logged and dropped, and is invisible to the mutating
 * caller and to other subscribers.
 */
use axum::http::StatusCode;
use thiserror::Error;

/// Backend-specific error types
///
/// Each variant maps to an HTTP status code via `status_code()` and can be
/// returned directly from handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The referenced resource does not exist
    #[error("{resource} not found")]
    NotFound {
        /// What was looked up, e.g. "ticket"
        resource: String,
    },

    /// The request was malformed and was rejected before any state change
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Human-readable error message
        message: String,
    },

    /// JSON serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// Create a new not-found error
    ///
    /// # Example
    ///
    /// ```rust
    /// use chargedesk::backend::error::ApiError;
    ///
    /// let err = ApiError::not_found("ticket");
    /// ```
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a new invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
