use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use assetdesk_core::assets::{Asset, AssetDraft, AssetRepositoryTrait, AssetUpdate};
use assetdesk_core::errors::{DatabaseError, Result};

use super::model::{AssetChangesetDB, AssetDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::assets;

/// Repository for managing asset data in the database.
///
/// Reads borrow pooled connections; mutations run on the writer task.
pub struct SqliteAssetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SqliteAssetRepository {
    /// Creates a new SqliteAssetRepository instance
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }

    /// Lists all assets, most recently created first.
    fn list_impl(&self) -> Result<Vec<Asset>> {
        let mut conn = get_connection(&self.pool)?;

        let results = assets::table
            .select(AssetDB::as_select())
            .order(assets::created_at.desc())
            .load::<AssetDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(results.into_iter().map(Asset::from).collect())
    }

    /// Retrieves an asset by its ID
    fn get_by_id_impl(&self, asset_id: &str) -> Result<Asset> {
        let mut conn = get_connection(&self.pool)?;

        let result = assets::table
            .select(AssetDB::as_select())
            .find(asset_id)
            .first::<AssetDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(result.into())
    }

    /// Retrieves an asset by its serial number
    fn find_by_serial_impl(&self, serial_number: &str) -> Result<Asset> {
        let mut conn = get_connection(&self.pool)?;

        let result = assets::table
            .select(AssetDB::as_select())
            .filter(assets::serial_number.eq(serial_number))
            .first::<AssetDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(result.into())
    }
}

#[async_trait]
impl AssetRepositoryTrait for SqliteAssetRepository {
    /// Inserts a new asset row; the id and timestamps are assigned here.
    async fn create(&self, draft: AssetDraft) -> Result<Asset> {
        let asset_db: AssetDB = draft.into();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Asset> {
                let result_db = diesel::insert_into(assets::table)
                    .values(&asset_db)
                    .get_result::<AssetDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(result_db.into())
            })
            .await
    }

    fn list(&self) -> Result<Vec<Asset>> {
        self.list_impl()
    }

    fn get_by_id(&self, asset_id: &str) -> Result<Asset> {
        self.get_by_id_impl(asset_id)
    }

    fn find_by_serial(&self, serial_number: &str) -> Result<Asset> {
        self.find_by_serial_impl(serial_number)
    }

    /// Applies the given fields to the matching row; absent fields keep their
    /// stored values.
    async fn update(&self, asset_id: &str, update: AssetUpdate) -> Result<()> {
        if update.is_empty() {
            return Ok(());
        }

        let asset_id_owned = asset_id.to_string();
        let changeset: AssetChangesetDB = update.into();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let affected =
                    diesel::update(assets::table.filter(assets::id.eq(&asset_id_owned)))
                        .set(&changeset)
                        .execute(conn)
                        .map_err(StorageError::from)?;

                if affected == 0 {
                    return Err(DatabaseError::NotFound(asset_id_owned).into());
                }
                Ok(())
            })
            .await
    }

    /// Sets or clears the assignment reference.
    async fn set_assignment(&self, asset_id: &str, assignee_id: Option<String>) -> Result<()> {
        let asset_id_owned = asset_id.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                let now = chrono::Utc::now().naive_utc();
                let affected =
                    diesel::update(assets::table.filter(assets::id.eq(&asset_id_owned)))
                        .set((
                            assets::assigned_to.eq(assignee_id),
                            assets::updated_at.eq(now),
                        ))
                        .execute(conn)
                        .map_err(StorageError::from)?;

                if affected == 0 {
                    return Err(DatabaseError::NotFound(asset_id_owned).into());
                }
                Ok(())
            })
            .await
    }

    /// Removes the matching row. Deleting an id that is already gone is a
    /// no-op.
    async fn delete(&self, asset_id: &str) -> Result<()> {
        let asset_id_owned = asset_id.to_string();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::delete(assets::table.filter(assets::id.eq(&asset_id_owned)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}
