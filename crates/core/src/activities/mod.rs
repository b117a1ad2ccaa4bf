//! Activity log module - domain models, services, and traits.

mod activities_constants;
mod activities_model;
mod activities_service;
mod activities_traits;


pub use activities_constants::*;
pub use activities_model::{ActivityEntry, NewActivityEntry};
pub use activities_service::ActivityLogService;
pub use activities_traits::{ActivityLogRepositoryTrait, ActivityLogServiceTrait};
