//! Activity log domain models.
//!
//! The activity log is an independent entity: asset CRUD does not write to
//! it. Callers record entries explicitly for the events they care about.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A recorded event in the activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: String,
    /// What happened ("created", "assigned", "checked_in", ...). Open set.
    pub action: String,
    /// The kind of record the event is about ("asset", "user", ...).
    pub item_type: String,
    pub item_id: Option<String>,
    /// Who performed the action, if known.
    pub actor: Option<String>,
    /// Free-form structured payload attached by the caller.
    pub details: Option<Value>,
    pub created_at: NaiveDateTime,
}

/// Input model for recording a new activity entry.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewActivityEntry {
    pub action: String,
    pub item_type: String,
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub actor: Option<String>,
    #[serde(default)]
    pub details: Option<Value>,
}
