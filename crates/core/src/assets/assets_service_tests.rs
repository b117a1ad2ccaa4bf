//! Tests for the asset service contract.
//!
//! These tests run the service against an in-memory mock repository and pin
//! down the creation normalization rules and the asymmetric error contract:
//! creation always resolves to a tagged response, everything else propagates.

#[cfg(test)]
mod tests {
    use crate::assets::{
        AssetDraft, AssetRepositoryTrait, AssetService, AssetServiceTrait, AssetUpdate, NewAsset,
    };
    use crate::assets::Asset;
    use crate::errors::{DatabaseError, Error, Result};
    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    // =========================================================================
    // Mock AssetRepository
    // =========================================================================

    #[derive(Clone, Default)]
    struct MockAssetRepository {
        assets: Arc<Mutex<Vec<Asset>>>,
        fail_on_create: Arc<Mutex<bool>>,
    }

    impl MockAssetRepository {
        fn new() -> Self {
            Self::default()
        }

        fn set_fail_on_create(&self, fail: bool) {
            *self.fail_on_create.lock().unwrap() = fail;
        }

        fn add_asset(&self, asset: Asset) {
            self.assets.lock().unwrap().push(asset);
        }

        fn materialize(&self, draft: AssetDraft) -> Asset {
            let now = Utc::now().naive_utc();
            let id = format!("asset-{}", self.assets.lock().unwrap().len() + 1);
            Asset {
                id,
                name: draft.name,
                category: draft.category,
                device_type: draft.device_type,
                brand: draft.brand,
                model: draft.model,
                serial_number: draft.serial_number,
                status: draft.status,
                location: draft.location,
                assigned_to: draft.assigned_to,
                purchase_price: draft.purchase_price,
                purchase_date: draft.purchase_date,
                warranty_expiry: draft.warranty_expiry,
                notes: draft.notes,
                created_at: now,
                updated_at: now,
            }
        }
    }

    #[async_trait]
    impl AssetRepositoryTrait for MockAssetRepository {
        async fn create(&self, draft: AssetDraft) -> Result<Asset> {
            if *self.fail_on_create.lock().unwrap() {
                return Err(Error::Unexpected("Intentional create failure".into()));
            }
            let asset = self.materialize(draft);
            self.assets.lock().unwrap().push(asset.clone());
            Ok(asset)
        }

        fn list(&self) -> Result<Vec<Asset>> {
            let mut assets = self.assets.lock().unwrap().clone();
            assets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(assets)
        }

        fn get_by_id(&self, asset_id: &str) -> Result<Asset> {
            self.assets
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.id == asset_id)
                .cloned()
                .ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound(asset_id.to_string()))
                })
        }

        fn find_by_serial(&self, serial_number: &str) -> Result<Asset> {
            self.assets
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.serial_number == serial_number)
                .cloned()
                .ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound(serial_number.to_string()))
                })
        }

        async fn update(&self, asset_id: &str, update: AssetUpdate) -> Result<()> {
            let mut assets = self.assets.lock().unwrap();
            let asset = assets
                .iter_mut()
                .find(|a| a.id == asset_id)
                .ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound(asset_id.to_string()))
                })?;
            if let Some(name) = update.name {
                asset.name = name;
            }
            if let Some(category) = update.category {
                asset.category = category;
            }
            if let Some(device_type) = update.device_type {
                asset.device_type = device_type;
            }
            if let Some(brand) = update.brand {
                asset.brand = brand;
            }
            if let Some(model) = update.model {
                asset.model = model;
            }
            if let Some(serial_number) = update.serial_number {
                asset.serial_number = serial_number;
            }
            if let Some(status) = update.status {
                asset.status = Some(status);
            }
            if let Some(location) = update.location {
                asset.location = Some(location);
            }
            if let Some(price) = update.purchase_price {
                asset.purchase_price = Some(price);
            }
            if let Some(date) = update.purchase_date {
                asset.purchase_date = date;
            }
            if let Some(expiry) = update.warranty_expiry {
                asset.warranty_expiry = Some(expiry);
            }
            if let Some(notes) = update.notes {
                asset.notes = Some(notes);
            }
            asset.updated_at = Utc::now().naive_utc();
            Ok(())
        }

        async fn set_assignment(
            &self,
            asset_id: &str,
            assignee_id: Option<String>,
        ) -> Result<()> {
            let mut assets = self.assets.lock().unwrap();
            let asset = assets
                .iter_mut()
                .find(|a| a.id == asset_id)
                .ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound(asset_id.to_string()))
                })?;
            asset.assigned_to = assignee_id;
            Ok(())
        }

        async fn delete(&self, asset_id: &str) -> Result<()> {
            self.assets.lock().unwrap().retain(|a| a.id != asset_id);
            Ok(())
        }
    }

    fn service_with_mock() -> (AssetService, MockAssetRepository) {
        let repo = MockAssetRepository::new();
        let service = AssetService::new(Arc::new(repo.clone()));
        (service, repo)
    }

    fn laptop_input() -> NewAsset {
        NewAsset {
            device_type: "Laptop".to_string(),
            brand: "Acme".to_string(),
            model: "X1".to_string(),
            serial_number: "SN1".to_string(),
            ..Default::default()
        }
    }

    // =========================================================================
    // create_asset
    // =========================================================================

    #[tokio::test]
    async fn test_create_normalizes_input() {
        let (service, _repo) = service_with_mock();

        let mut input = laptop_input();
        input.assigned_to = Some("user-42".to_string());

        let response = service.create_asset(input).await;
        assert!(response.success);
        assert!(response.error.is_none());

        let asset = response.asset.expect("created asset");
        assert_eq!(asset.name, "Acme X1");
        assert_eq!(asset.category, "Laptop");
        assert_eq!(asset.assigned_to, None);
        assert_eq!(asset.purchase_date, Utc::now().date_naive());
    }

    #[tokio::test]
    async fn test_create_defaults_category_for_blank_device_type() {
        let (service, _repo) = service_with_mock();

        let mut input = laptop_input();
        input.device_type = "".to_string();

        let response = service.create_asset(input).await;
        assert!(response.success);
        assert_eq!(response.asset.unwrap().category, "Other");
    }

    #[tokio::test]
    async fn test_create_failure_resolves_to_tagged_response() {
        let (service, repo) = service_with_mock();
        repo.set_fail_on_create(true);

        let response = service.create_asset(laptop_input()).await;
        assert!(!response.success);
        assert!(response.asset.is_none());
        let message = response.error.expect("failure message");
        assert!(message.contains("Intentional create failure"));
    }

    // =========================================================================
    // reads
    // =========================================================================

    #[tokio::test]
    async fn test_get_assets_newest_first() {
        let (service, repo) = service_with_mock();

        for serial in ["SN1", "SN2", "SN3"] {
            let mut input = laptop_input();
            input.serial_number = serial.to_string();
            let response = service.create_asset(input).await;
            assert!(response.success);
            // Distinct creation instants for a deterministic order.
            std::thread::sleep(std::time::Duration::from_millis(2));
        }

        let assets = service.get_assets().unwrap();
        let serials: Vec<&str> = assets.iter().map(|a| a.serial_number.as_str()).collect();
        assert_eq!(serials, vec!["SN3", "SN2", "SN1"]);

        let _ = repo;
    }

    #[tokio::test]
    async fn test_find_by_serial() {
        let (service, _repo) = service_with_mock();
        let response = service.create_asset(laptop_input()).await;
        let created = response.asset.unwrap();

        let found = service.find_by_serial("SN1").unwrap();
        assert_eq!(found.id, created.id);

        let missing = service.find_by_serial("nope");
        assert!(matches!(
            missing,
            Err(crate::Error::Database(DatabaseError::NotFound(_)))
        ));
    }

    // =========================================================================
    // mutations
    // =========================================================================

    #[tokio::test]
    async fn test_update_touches_only_given_fields() {
        let (service, _repo) = service_with_mock();
        let created = service.create_asset(laptop_input()).await.asset.unwrap();

        let update = AssetUpdate {
            status: Some("retired".to_string()),
            ..Default::default()
        };
        service.update_asset(&created.id, update).await.unwrap();

        let after = service.get_asset_by_id(&created.id).unwrap();
        assert_eq!(after.status.as_deref(), Some("retired"));
        assert_eq!(after.name, created.name);
        assert_eq!(after.brand, created.brand);
        assert_eq!(after.serial_number, created.serial_number);
        assert_eq!(after.purchase_date, created.purchase_date);
    }

    #[tokio::test]
    async fn test_update_unknown_id_propagates_error() {
        let (service, _repo) = service_with_mock();
        let update = AssetUpdate {
            status: Some("retired".to_string()),
            ..Default::default()
        };
        let result = service.update_asset("missing", update).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_set_assignment_assigns_and_clears() {
        let (service, _repo) = service_with_mock();
        let created = service.create_asset(laptop_input()).await.asset.unwrap();

        service
            .set_assignment(&created.id, Some("user-7".to_string()))
            .await
            .unwrap();
        assert_eq!(
            service.get_asset_by_id(&created.id).unwrap().assigned_to.as_deref(),
            Some("user-7")
        );

        service.set_assignment(&created.id, None).await.unwrap();
        assert_eq!(service.get_asset_by_id(&created.id).unwrap().assigned_to, None);
    }

    #[tokio::test]
    async fn test_delete_then_list_excludes() {
        let (service, _repo) = service_with_mock();
        let first = service.create_asset(laptop_input()).await.asset.unwrap();
        let mut second_input = laptop_input();
        second_input.serial_number = "SN2".to_string();
        let second = service.create_asset(second_input).await.asset.unwrap();

        service.delete_asset(&first.id).await.unwrap();

        let remaining = service.get_assets().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second.id);
    }

    // =========================================================================
    // summary
    // =========================================================================

    #[tokio::test]
    async fn test_summary_over_inventory() {
        let (service, repo) = service_with_mock();

        let mut input = laptop_input();
        input.status = Some("active".to_string());
        input.purchase_price = Some(dec!(999.99));
        service.create_asset(input).await;

        let mut input = laptop_input();
        input.serial_number = "SN2".to_string();
        input.device_type = "Phone".to_string();
        input.status = Some("repair".to_string());
        service.create_asset(input).await;

        let created = service.get_assets().unwrap();
        service
            .set_assignment(&created[0].id, Some("user-1".to_string()))
            .await
            .unwrap();

        let summary = service.get_summary().unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.assigned, 1);
        assert_eq!(summary.by_category.get("Laptop"), Some(&1));
        assert_eq!(summary.by_category.get("Phone"), Some(&1));
        assert_eq!(summary.by_status.get("active"), Some(&1));
        assert_eq!(summary.total_value, dec!(999.99));

        let _ = repo;
    }

    #[tokio::test]
    async fn test_service_behind_trait_object() {
        let repo = MockAssetRepository::new();
        repo.add_asset(Asset {
            id: "a1".to_string(),
            serial_number: "SN1".to_string(),
            ..Default::default()
        });

        let service: Arc<dyn AssetServiceTrait> =
            Arc::new(AssetService::new(Arc::new(repo)));
        assert_eq!(service.get_assets().unwrap().len(), 1);
    }
}
