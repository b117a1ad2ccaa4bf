//! Constants for the activity log module.

/// Number of entries returned when the caller does not ask for a limit.
pub const DEFAULT_RECENT_LIMIT: i64 = 50;
