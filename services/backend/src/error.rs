//! services/backend/src/error.rs
//!
//! Defines the primary error type for the entire backend service.

use crate::config::ConfigError;
use rentflow_core::ports::PortError;

/// The primary error type for the `backend` service.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from one of the core service ports.
    #[error("Service Port Error: {0}")]
    Port(#[from] PortError),

    /// Represents a standard Input/Output error (e.g., creating the data directory).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Returned by session operations that need a signed-in user.
    #[error("You must be signed in to perform this action")]
    NotSignedIn,

    /// A catch-all for any other unexpected errors.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}
