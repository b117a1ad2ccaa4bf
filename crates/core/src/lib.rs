//! Assetdesk Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Assetdesk.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod activities;
pub mod assets;
pub mod errors;

// Re-export common types from the assets module
pub use assets::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
