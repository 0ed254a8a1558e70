use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter};

use super::{DaoBase, DaoResult};
use crate::db::entities::prelude::Task;
use crate::db::entities::task;

#[derive(Clone)]
pub struct TaskDao {
    db: DatabaseConnection,
}

impl DaoBase for TaskDao {
    type Entity = Task;

    const ENTITY_NAME: &'static str = "task";

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl TaskDao {
    pub async fn list_all(&self) -> DaoResult<Vec<task::Model>> {
        self.list(|query| query).await
    }

    pub async fn list_by_project(&self, project_id: i32) -> DaoResult<Vec<task::Model>> {
        self.list(|query| query.filter(task::Column::ProjectId.eq(project_id)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::TaskDao;
    use crate::db::dao::{DaoBase, DaoLayerError};
    use crate::db::entities::task;
    use crate::test_helpers::{task_model, ts};

    #[tokio::test]
    async fn list_by_project_passes_rows_through() {
        let rows = [
            task_model(2, 1, "Frontend", "In Progress", ts()),
            task_model(1, 1, "Wireframes", "Todo", ts()),
        ];
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([rows.clone()])
            .into_connection();
        let dao = TaskDao::new(&db);

        let listed = dao.list_by_project(1).await.expect("query should succeed");
        assert_eq!(listed, rows);
    }

    #[tokio::test]
    async fn find_by_id_reports_the_missing_task() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<task::Model>::new()])
            .into_connection();
        let dao = TaskDao::new(&db);

        let err = dao.find_by_id(99).await.expect_err("should be missing");
        assert!(matches!(
            err,
            DaoLayerError::NotFound {
                entity: "task",
                id: 99
            }
        ));
    }
}
