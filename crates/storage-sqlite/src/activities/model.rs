//! Database models for the activity log.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use assetdesk_core::activities::{ActivityEntry, NewActivityEntry};

/// Database model for activity log entries
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Default,
)]
#[diesel(table_name = crate::schema::activity_log)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ActivityLogDB {
    pub id: String,
    pub action: String,
    pub item_type: String,
    pub item_id: Option<String>,
    pub actor: Option<String>,
    pub details: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<ActivityLogDB> for ActivityEntry {
    fn from(db: ActivityLogDB) -> Self {
        // Details are stored as JSON text; unparseable payloads are dropped.
        let details = db.details.as_deref().and_then(|s| {
            serde_json::from_str(s)
                .map_err(|e| {
                    log::error!("Failed to parse stored activity details: {}", e);
                    e
                })
                .ok()
        });
        Self {
            id: db.id,
            action: db.action,
            item_type: db.item_type,
            item_id: db.item_id,
            actor: db.actor,
            details,
            created_at: db.created_at,
        }
    }
}

impl From<NewActivityEntry> for ActivityLogDB {
    fn from(entry: NewActivityEntry) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            action: entry.action,
            item_type: entry.item_type,
            item_id: entry.item_id,
            actor: entry.actor,
            details: entry.details.map(|v| v.to_string()),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
