//! Error types for the contacts gateway.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{Capability, ValidationError};
use thiserror::Error;

/// Errors raised by an external collaborator (directory, resolver, block list).
///
/// The gateway never retries or recovers these; they are propagated unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    /// The backing service could not be reached
    #[error("Collaborator unavailable: {0}")]
    Unavailable(String),

    /// The backing service refused the request
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// The call did not complete within the configured timeout
    #[error("Collaborator timed out")]
    Timeout,

    /// The backing service reported the record missing
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Generic collaborator error with context
    #[error("Collaborator error: {0}")]
    Other(String),
}

/// Errors raised by the host navigation facility.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// Nothing on the host can display the requested view
    #[error("No handler for view: {0}")]
    NoHandler(String),

    /// The host refused to start the view
    #[error("Navigation rejected: {0}")]
    Rejected(String),
}

/// Errors returned by gateway operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// A required capability was not granted; no collaborator was called
    #[error("Permission denied: missing capability {capability}")]
    PermissionDenied { capability: Capability },

    /// A collaborator failed
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    /// The navigation request could not be started
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    /// Caller supplied malformed input
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with GatewayError
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Convenience type alias for Results with CollaboratorError
pub type CollaboratorResult<T> = Result<T, CollaboratorError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
