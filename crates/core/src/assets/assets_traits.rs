use super::assets_model::{
    Asset, AssetDraft, AssetSummary, AssetUpdate, CreateAssetResponse, NewAsset,
};
use crate::errors::Result;

/// Trait defining the contract for Asset service operations.
///
/// Note the deliberately asymmetric error contract: `create_asset` always
/// resolves to a tagged response, while every other operation propagates
/// errors to the caller.
#[async_trait::async_trait]
pub trait AssetServiceTrait: Send + Sync {
    async fn create_asset(&self, input: NewAsset) -> CreateAssetResponse;
    /// All assets, most recently created first.
    fn get_assets(&self) -> Result<Vec<Asset>>;
    fn get_asset_by_id(&self, asset_id: &str) -> Result<Asset>;
    /// Looks an asset up by its serial number (device-scan path).
    fn find_by_serial(&self, serial_number: &str) -> Result<Asset>;
    async fn update_asset(&self, asset_id: &str, update: AssetUpdate) -> Result<()>;
    /// Assigns the asset to `assignee_id`, or clears the assignment on `None`.
    async fn set_assignment(&self, asset_id: &str, assignee_id: Option<String>) -> Result<()>;
    async fn delete_asset(&self, asset_id: &str) -> Result<()>;
    fn get_summary(&self) -> Result<AssetSummary>;
}

/// Trait defining the contract for Asset repository operations.
#[async_trait::async_trait]
pub trait AssetRepositoryTrait: Send + Sync {
    async fn create(&self, draft: AssetDraft) -> Result<Asset>;
    /// All assets ordered by creation time, descending.
    fn list(&self) -> Result<Vec<Asset>>;
    fn get_by_id(&self, asset_id: &str) -> Result<Asset>;
    fn find_by_serial(&self, serial_number: &str) -> Result<Asset>;
    async fn update(&self, asset_id: &str, update: AssetUpdate) -> Result<()>;
    async fn set_assignment(&self, asset_id: &str, assignee_id: Option<String>) -> Result<()>;
    async fn delete(&self, asset_id: &str) -> Result<()>;
}
