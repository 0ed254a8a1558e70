use sea_orm::Set;
use tracing::info;

use crate::{
    db::dao::{DaoBase, ProjectDao, TaskDao},
    db::entities::{project, task},
    error::AppError,
    types::{Priority, TaskStatus},
};

/// One-time demo data, guarded by a table-emptiness check. Two simultaneous
/// first calls can both observe the empty table and both insert; that race
/// is accepted for a single-user demo.
#[derive(Clone)]
pub struct SeedService {
    project_dao: ProjectDao,
    task_dao: TaskDao,
}

impl SeedService {
    pub fn new(project_dao: ProjectDao, task_dao: TaskDao) -> Self {
        Self {
            project_dao,
            task_dao,
        }
    }

    /// Returns whether anything was inserted.
    pub async fn seed_demo_data(&self) -> Result<bool, AppError> {
        if self.project_dao.first().await?.is_some() {
            return Ok(false);
        }

        info!("seeding demo projects and tasks");

        let website = self
            .project_dao
            .create(demo_project(
                "Website Redesign",
                "UI/UX",
                "Alice",
                "3 months",
                Priority::High,
                "Overhaul the company website",
            ))
            .await?;
        self.project_dao
            .create(demo_project(
                "Mobile App",
                "Development",
                "Bob",
                "6 months",
                Priority::Medium,
                "Build customer-facing app",
            ))
            .await?;

        self.task_dao
            .create(demo_task(
                "Wireframes",
                "Charlie",
                website.id,
                Priority::Medium,
                TaskStatus::Todo,
                "Create initial wireframes",
            ))
            .await?;
        self.task_dao
            .create(demo_task(
                "Frontend",
                "Dana",
                website.id,
                Priority::High,
                TaskStatus::InProgress,
                "Implement designs",
            ))
            .await?;

        Ok(true)
    }
}

fn demo_project(
    name: &str,
    topic: &str,
    manager: &str,
    duration: &str,
    priority: Priority,
    description: &str,
) -> project::ActiveModel {
    project::ActiveModel {
        name: Set(name.to_string()),
        topic: Set(Some(topic.to_string())),
        manager: Set(Some(manager.to_string())),
        duration: Set(Some(duration.to_string())),
        priority: Set(Some(priority.to_string())),
        description: Set(Some(description.to_string())),
        ..Default::default()
    }
}

fn demo_task(
    name: &str,
    assignee: &str,
    project_id: i32,
    priority: Priority,
    status: TaskStatus,
    description: &str,
) -> task::ActiveModel {
    task::ActiveModel {
        name: Set(name.to_string()),
        assignee: Set(Some(assignee.to_string())),
        project_id: Set(project_id),
        priority: Set(Some(priority.to_string())),
        status: Set(Some(status.to_string())),
        description: Set(Some(description.to_string())),
        ..Default::default()
    }
}
