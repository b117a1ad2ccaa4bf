//! Asset repository implementation and database models.

mod model;
mod repository;

pub use model::{AssetChangesetDB, AssetDB};
pub use repository::SqliteAssetRepository;
