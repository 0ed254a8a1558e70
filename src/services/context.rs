use sea_orm::DatabaseConnection;

use crate::{
    db::dao::DaoContext,
    services::{
        project_service::ProjectService, seed_service::SeedService, task_service::TaskService,
    },
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db)
    }

    pub fn project(&self) -> ProjectService {
        ProjectService::new(self.daos.project())
    }

    pub fn task(&self) -> TaskService {
        TaskService::new(self.daos.task(), self.daos.project())
    }

    pub fn seed(&self) -> SeedService {
        SeedService::new(self.daos.project(), self.daos.task())
    }
}
