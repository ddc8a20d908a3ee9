//! services/backend/src/lib.rs
//!
//! The backend library: configuration, the JSON-file market store, the AI
//! collaborator adapters, and the session layer that ties them together.

pub mod adapters;
pub mod config;
pub mod error;
pub mod session;
