use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use assetdesk_core::activities::{ActivityEntry, ActivityLogRepositoryTrait, NewActivityEntry};
use assetdesk_core::errors::Result;

use super::model::ActivityLogDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::activity_log;

/// Repository for the activity log.
pub struct SqliteActivityLogRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SqliteActivityLogRepository {
    /// Creates a new SqliteActivityLogRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }

    fn list_recent_impl(&self, limit: i64) -> Result<Vec<ActivityEntry>> {
        let mut conn = get_connection(&self.pool)?;

        let results = activity_log::table
            .select(ActivityLogDB::as_select())
            .order(activity_log::created_at.desc())
            .limit(limit)
            .load::<ActivityLogDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(results.into_iter().map(ActivityEntry::from).collect())
    }
}

#[async_trait]
impl ActivityLogRepositoryTrait for SqliteActivityLogRepository {
    /// Inserts a new log entry; the id and timestamp are assigned here.
    async fn record(&self, entry: NewActivityEntry) -> Result<ActivityEntry> {
        let entry_db: ActivityLogDB = entry.into();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<ActivityEntry> {
                let result_db = diesel::insert_into(activity_log::table)
                    .values(&entry_db)
                    .get_result::<ActivityLogDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(result_db.into())
            })
            .await
    }

    fn list_recent(&self, limit: i64) -> Result<Vec<ActivityEntry>> {
        self.list_recent_impl(limit)
    }
}
