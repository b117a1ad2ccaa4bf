//! Constants for the assets module.

/// Category assigned when a device type is not provided.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Failure message used when an underlying error carries no message of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";
