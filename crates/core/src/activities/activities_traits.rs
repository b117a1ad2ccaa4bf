use super::activities_model::{ActivityEntry, NewActivityEntry};
use crate::errors::Result;

/// Trait defining the contract for activity log service operations.
#[async_trait::async_trait]
pub trait ActivityLogServiceTrait: Send + Sync {
    async fn record_activity(&self, entry: NewActivityEntry) -> Result<ActivityEntry>;
    /// Most recent entries, newest first. `None` uses the default limit.
    fn get_recent_activities(&self, limit: Option<i64>) -> Result<Vec<ActivityEntry>>;
}

/// Trait defining the contract for activity log repository operations.
#[async_trait::async_trait]
pub trait ActivityLogRepositoryTrait: Send + Sync {
    async fn record(&self, entry: NewActivityEntry) -> Result<ActivityEntry>;
    fn list_recent(&self, limit: i64) -> Result<Vec<ActivityEntry>>;
}
