use log::{debug, error};
use std::sync::Arc;

use super::assets_model::{
    Asset, AssetSummary, AssetUpdate, CreateAssetResponse, NewAsset,
};
use super::assets_traits::{AssetRepositoryTrait, AssetServiceTrait};
use crate::errors::Result;

/// Service for managing inventory assets.
pub struct AssetService {
    asset_repository: Arc<dyn AssetRepositoryTrait>,
}

impl AssetService {
    /// Creates a new AssetService instance
    pub fn new(asset_repository: Arc<dyn AssetRepositoryTrait>) -> Self {
        Self { asset_repository }
    }
}

#[async_trait::async_trait]
impl AssetServiceTrait for AssetService {
    /// Creates a new asset.
    ///
    /// The input is normalized before it reaches the store: the display name
    /// is composed from brand and model, the category falls back to the
    /// default when the device type is blank, the assignment reference is
    /// cleared, and a missing purchase date defaults to today.
    ///
    /// Failures never escape this method; they are reported through the
    /// tagged response.
    async fn create_asset(&self, input: NewAsset) -> CreateAssetResponse {
        let today = chrono::Utc::now().date_naive();
        let draft = input.into_draft(today);

        debug!(
            "Creating asset: name={}, category={}, serial={}",
            draft.name, draft.category, draft.serial_number
        );

        match self.asset_repository.create(draft).await {
            Ok(asset) => CreateAssetResponse::created(asset),
            Err(e) => {
                error!("Failed to create asset: {}", e);
                CreateAssetResponse::failed(e.to_string())
            }
        }
    }

    /// Lists all assets, most recently created first.
    fn get_assets(&self) -> Result<Vec<Asset>> {
        self.asset_repository.list()
    }

    /// Retrieves an asset by its ID
    fn get_asset_by_id(&self, asset_id: &str) -> Result<Asset> {
        self.asset_repository.get_by_id(asset_id)
    }

    fn find_by_serial(&self, serial_number: &str) -> Result<Asset> {
        self.asset_repository.find_by_serial(serial_number)
    }

    /// Applies a partial update; fields not present are left unchanged.
    async fn update_asset(&self, asset_id: &str, update: AssetUpdate) -> Result<()> {
        self.asset_repository.update(asset_id, update).await
    }

    async fn set_assignment(&self, asset_id: &str, assignee_id: Option<String>) -> Result<()> {
        debug!("Updating assignment for asset {}", asset_id);
        self.asset_repository
            .set_assignment(asset_id, assignee_id)
            .await
    }

    async fn delete_asset(&self, asset_id: &str) -> Result<()> {
        self.asset_repository.delete(asset_id).await
    }

    /// Aggregate counts over the whole inventory.
    fn get_summary(&self) -> Result<AssetSummary> {
        let assets = self.asset_repository.list()?;
        Ok(AssetSummary::from_assets(&assets))
    }
}
