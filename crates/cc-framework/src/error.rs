//! # Client Errors
//!
//! This module defines the error taxonomy returned by every remote call.
//! Callers match on variants instead of inspecting transport status codes, so
//! the orchestration layer never needs to know how a failure travelled.

use crate::guid::Guid;

/// Errors that a remote call can fail with.
///
/// The type is `Clone + PartialEq` so a failing step's error can be compared
/// against the error the caller finally receives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The controller's request channel is closed.
    #[error("Controller closed")]
    ControllerClosed,

    /// The controller dropped the reply channel without answering.
    #[error("Controller dropped response channel")]
    ControllerDropped,

    /// No resource of this kind has the given guid.
    #[error("{kind} not found: {guid}")]
    ResourceNotFound { kind: &'static str, guid: Guid },

    /// The query used a filter the resource kind does not support.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The controller understood the request but refused to apply it.
    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    /// The caller is not allowed to perform the request.
    #[error("Not authorized: {0}")]
    Unauthorized(String),

    /// The controller does not expose the requested endpoint (older API).
    #[error("Endpoint not found: {0}")]
    EndpointNotFound(String),
}
