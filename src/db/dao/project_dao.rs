use sea_orm::{DatabaseConnection, EntityTrait};

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::prelude::Project;
use crate::db::entities::project;

#[derive(Clone)]
pub struct ProjectDao {
    db: DatabaseConnection,
}

impl DaoBase for ProjectDao {
    type Entity = Project;

    const ENTITY_NAME: &'static str = "project";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl ProjectDao {
    pub async fn list_all(&self) -> DaoResult<Vec<project::Model>> {
        self.list(|query| query).await
    }

    /// Any row at all. The seed routine only cares whether the table is
    /// empty.
    pub async fn first(&self) -> DaoResult<Option<project::Model>> {
        Project::find()
            .one(&self.db)
            .await
            .map_err(DaoLayerError::Db)
    }
}
