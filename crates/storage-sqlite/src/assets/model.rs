//! Database models for assets.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use assetdesk_core::assets::{Asset, AssetDraft, AssetUpdate};

/// Parses a stored purchase price. Prices are persisted as text; a value that
/// no longer parses is reported and surfaced as absent rather than failing
/// the whole row.
fn parse_price(value: &str) -> Option<Decimal> {
    match Decimal::from_str(value) {
        Ok(d) => Some(d),
        Err(e) => {
            log::error!("Failed to parse stored purchase price '{}': {}", value, e);
            None
        }
    }
}

/// Database model for assets
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Default,
)]
#[diesel(table_name = crate::schema::assets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AssetDB {
    pub id: String,
    pub name: String,
    pub category: String,
    pub device_type: String,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    pub status: Option<String>,
    pub location: Option<String>,
    pub assigned_to: Option<String>,
    pub purchase_price: Option<String>,
    pub purchase_date: NaiveDate,
    pub warranty_expiry: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Conversion implementations
impl From<AssetDB> for Asset {
    fn from(db: AssetDB) -> Self {
        let purchase_price = db.purchase_price.as_deref().and_then(parse_price);
        Self {
            id: db.id,
            name: db.name,
            category: db.category,
            device_type: db.device_type,
            brand: db.brand,
            model: db.model,
            serial_number: db.serial_number,
            status: db.status,
            location: db.location,
            assigned_to: db.assigned_to,
            purchase_price,
            purchase_date: db.purchase_date,
            warranty_expiry: db.warranty_expiry,
            notes: db.notes,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<AssetDraft> for AssetDB {
    fn from(draft: AssetDraft) -> Self {
        // The id and both timestamps are assigned here; callers never supply
        // them.
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            category: draft.category,
            device_type: draft.device_type,
            brand: draft.brand,
            model: draft.model,
            serial_number: draft.serial_number,
            status: draft.status,
            location: draft.location,
            assigned_to: draft.assigned_to,
            purchase_price: draft.purchase_price.map(|p| p.to_string()),
            purchase_date: draft.purchase_date,
            warranty_expiry: draft.warranty_expiry,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial changeset for asset updates. `None` fields leave their columns
/// untouched; `updated_at` is always set.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::assets)]
pub struct AssetChangesetDB {
    pub name: Option<String>,
    pub category: Option<String>,
    pub device_type: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
    pub purchase_price: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_expiry: Option<NaiveDate>,
    pub notes: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl From<AssetUpdate> for AssetChangesetDB {
    fn from(update: AssetUpdate) -> Self {
        Self {
            name: update.name,
            category: update.category,
            device_type: update.device_type,
            brand: update.brand,
            model: update.model,
            serial_number: update.serial_number,
            status: update.status,
            location: update.location,
            purchase_price: update.purchase_price.map(|p| p.to_string()),
            purchase_date: update.purchase_date,
            warranty_expiry: update.warranty_expiry,
            notes: update.notes,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
