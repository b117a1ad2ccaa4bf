//! Activity log repository implementation and database models.

mod model;
mod repository;

pub use model::ActivityLogDB;
pub use repository::SqliteActivityLogRepository;
