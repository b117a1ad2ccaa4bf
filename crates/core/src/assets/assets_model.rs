use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::assets_constants::{DEFAULT_CATEGORY, UNKNOWN_ERROR_MESSAGE};

/// Domain model representing a tracked device in the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    /// Display name, composed from brand and model at creation time.
    pub name: String,
    /// Grouping category, derived from the device type at creation time.
    pub category: String,
    pub device_type: String,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    /// Open status string ("active", "available", "repair", ...). Not
    /// validated here; the store holds whatever the caller supplied.
    pub status: Option<String>,
    pub location: Option<String>,
    /// Reference to the current assignee, if any.
    pub assigned_to: Option<String>,
    pub purchase_price: Option<Decimal>,
    pub purchase_date: NaiveDate,
    pub warranty_expiry: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new asset.
///
/// No required-field validation happens at this layer; the store rejects what
/// it cannot accept and the caller-facing form is expected to have validated
/// upstream.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub device_type: String,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Ignored at creation: new assets always start unassigned.
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub purchase_price: Option<Decimal>,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default)]
    pub warranty_expiry: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewAsset {
    /// Display name composed from brand and model.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Category derived from the device type; blank device types fall back to
    /// the default category.
    pub fn category(&self) -> String {
        if self.device_type.trim().is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            self.device_type.clone()
        }
    }

    /// Normalizes the input into the row shape handed to the store.
    ///
    /// `today` supplies the default purchase date. The assignment reference is
    /// always cleared: assets are created unassigned regardless of input.
    pub fn into_draft(self, today: NaiveDate) -> AssetDraft {
        let name = self.display_name();
        let category = self.category();
        AssetDraft {
            name,
            category,
            device_type: self.device_type,
            brand: self.brand,
            model: self.model,
            serial_number: self.serial_number,
            status: self.status,
            location: self.location,
            assigned_to: None,
            purchase_price: self.purchase_price,
            purchase_date: self.purchase_date.unwrap_or(today),
            warranty_expiry: self.warranty_expiry,
            notes: self.notes,
        }
    }
}

/// Fully normalized asset row, ready for insertion.
///
/// The id and timestamps are assigned by the storage layer, never by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssetDraft {
    pub name: String,
    pub category: String,
    pub device_type: String,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    pub status: Option<String>,
    pub location: Option<String>,
    pub assigned_to: Option<String>,
    pub purchase_price: Option<Decimal>,
    pub purchase_date: NaiveDate,
    pub warranty_expiry: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Partial update for an asset. `None` fields are left unchanged.
///
/// Assignment changes go through the dedicated assignment operation so that
/// `None` here never has to mean "clear the column".
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssetUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub device_type: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub purchase_price: Option<Decimal>,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default)]
    pub warranty_expiry: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl AssetUpdate {
    /// True when no field is set; such an update must leave the row untouched.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.device_type.is_none()
            && self.brand.is_none()
            && self.model.is_none()
            && self.serial_number.is_none()
            && self.status.is_none()
            && self.location.is_none()
            && self.purchase_price.is_none()
            && self.purchase_date.is_none()
            && self.warranty_expiry.is_none()
            && self.notes.is_none()
    }
}

/// Outcome of an asset creation request.
///
/// Creation never surfaces an error to its caller: every failure is captured
/// and reported through this tagged shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<Asset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CreateAssetResponse {
    pub fn created(asset: Asset) -> Self {
        Self {
            success: true,
            asset: Some(asset),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            message
        };
        Self {
            success: false,
            asset: None,
            error: Some(message),
        }
    }
}

/// Aggregate counts over the inventory, computed from the full listing.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssetSummary {
    pub total: usize,
    pub assigned: usize,
    /// Counts keyed by status; rows without a status are not counted here.
    pub by_status: BTreeMap<String, usize>,
    pub by_category: BTreeMap<String, usize>,
    /// Sum of the known purchase prices.
    pub total_value: Decimal,
}

impl AssetSummary {
    /// Folds a listing into its aggregate counts.
    pub fn from_assets(assets: &[Asset]) -> Self {
        let mut summary = AssetSummary {
            total: assets.len(),
            ..Default::default()
        };
        for asset in assets {
            if asset.assigned_to.is_some() {
                summary.assigned += 1;
            }
            if let Some(status) = &asset.status {
                *summary.by_status.entry(status.clone()).or_default() += 1;
            }
            *summary.by_category.entry(asset.category.clone()).or_default() += 1;
            if let Some(price) = asset.purchase_price {
                summary.total_value += price;
            }
        }
        summary
    }
}
