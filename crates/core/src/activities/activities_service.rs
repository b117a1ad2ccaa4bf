use log::debug;
use std::sync::Arc;

use super::activities_constants::DEFAULT_RECENT_LIMIT;
use super::activities_model::{ActivityEntry, NewActivityEntry};
use super::activities_traits::{ActivityLogRepositoryTrait, ActivityLogServiceTrait};
use crate::errors::Result;

/// Service for recording and reading the activity log.
pub struct ActivityLogService {
    activity_repository: Arc<dyn ActivityLogRepositoryTrait>,
}

impl ActivityLogService {
    pub fn new(activity_repository: Arc<dyn ActivityLogRepositoryTrait>) -> Self {
        Self {
            activity_repository,
        }
    }
}

#[async_trait::async_trait]
impl ActivityLogServiceTrait for ActivityLogService {
    async fn record_activity(&self, entry: NewActivityEntry) -> Result<ActivityEntry> {
        debug!(
            "Recording activity: action={}, item_type={}",
            entry.action, entry.item_type
        );
        self.activity_repository.record(entry).await
    }

    fn get_recent_activities(&self, limit: Option<i64>) -> Result<Vec<ActivityEntry>> {
        let limit = match limit {
            Some(n) if n > 0 => n,
            _ => DEFAULT_RECENT_LIMIT,
        };
        self.activity_repository.list_recent(limit)
    }
}
