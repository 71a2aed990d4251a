//! Shared domain error type.
//!
//! [`CoreError`] is the error currency between the pure domain layer and the
//! HTTP layer. `atrium-api` maps each variant onto an HTTP status and a
//! stable error code string.

use crate::types::DbId;

/// Domain-level error, independent of any transport.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed domain validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The operation conflicts with current state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Missing or invalid credentials.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// A downstream service (payment gateway, object store) failed.
    #[error("upstream service error: {0}")]
    Upstream(String),

    /// Anything else.
    #[error("internal error: {0}")]
    Internal(String),
}
