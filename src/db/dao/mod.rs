pub mod base;
pub mod base_traits;
mod context;
pub mod error;
pub mod project_dao;
pub mod task_dao;

pub use base::DaoBase;
pub use base_traits::{CreatedAtActiveModel, HasCreatedAtColumn};
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use project_dao::ProjectDao;
pub use task_dao::TaskDao;
