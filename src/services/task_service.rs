use sea_orm::Set;
use serde::Deserialize;

use crate::{
    db::dao::{DaoBase, DaoLayerError, ProjectDao, TaskDao},
    db::entities::task,
    error::AppError,
    services::optional_field,
    types::{Priority, TaskStatus},
};

/// The task form body; see [`super::project_service::ProjectInput`] for the
/// wire-level conventions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub assignee: String,
    #[serde(default)]
    pub project_id: Option<i32>,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
}

struct TaskFields {
    name: String,
    assignee: Option<String>,
    project_id: i32,
    priority: Option<String>,
    status: String,
    image: Option<String>,
    description: Option<String>,
}

#[derive(Clone)]
pub struct TaskService {
    task_dao: TaskDao,
    project_dao: ProjectDao,
}

impl TaskService {
    pub fn new(task_dao: TaskDao, project_dao: ProjectDao) -> Self {
        Self {
            task_dao,
            project_dao,
        }
    }

    pub async fn create(&self, input: TaskInput) -> Result<task::Model, AppError> {
        let fields = validated(input)?;
        self.require_existing_project(fields.project_id).await?;

        let model = task::ActiveModel {
            name: Set(fields.name),
            assignee: Set(fields.assignee),
            project_id: Set(fields.project_id),
            priority: Set(fields.priority),
            status: Set(Some(fields.status)),
            image: Set(fields.image),
            description: Set(fields.description),
            ..Default::default()
        };
        Ok(self.task_dao.create(model).await?)
    }

    /// Overwrites every mutable field unconditionally, including the owning
    /// project.
    pub async fn update(&self, id: i32, input: TaskInput) -> Result<task::Model, AppError> {
        let fields = validated(input)?;
        self.require_existing_project(fields.project_id).await?;

        Ok(self
            .task_dao
            .update(id, move |active| overwrite(active, fields))
            .await?)
    }

    pub async fn list_all(&self) -> Result<Vec<task::Model>, AppError> {
        Ok(self.task_dao.list_all().await?)
    }

    pub async fn list_by_project(&self, project_id: i32) -> Result<Vec<task::Model>, AppError> {
        Ok(self.task_dao.list_by_project(project_id).await?)
    }

    pub async fn require(&self, id: i32) -> Result<task::Model, AppError> {
        Ok(self.task_dao.find_by_id(id).await?)
    }

    // A submitted reference to a project that does not exist is a form
    // error, not a missing page.
    async fn require_existing_project(&self, project_id: i32) -> Result<(), AppError> {
        match self.project_dao.find_by_id(project_id).await {
            Ok(_) => Ok(()),
            Err(DaoLayerError::NotFound { .. }) => {
                Err(AppError::bad_request("project does not exist"))
            }
            Err(err) => Err(err.into()),
        }
    }
}

// Every mutable column is written unconditionally, including the owning
// project; empty form fields clear the stored value.
fn overwrite(active: &mut task::ActiveModel, fields: TaskFields) {
    active.name = Set(fields.name);
    active.assignee = Set(fields.assignee);
    active.project_id = Set(fields.project_id);
    active.priority = Set(fields.priority);
    active.status = Set(Some(fields.status));
    active.image = Set(fields.image);
    active.description = Set(fields.description);
}

fn validated(input: TaskInput) -> Result<TaskFields, AppError> {
    let name = input.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::bad_request("name is required"));
    }

    let Some(project_id) = input.project_id else {
        return Err(AppError::bad_request("project is required"));
    };

    let status = input.status.trim();
    if status.is_empty() {
        return Err(AppError::bad_request("status is required"));
    }
    let status = status
        .parse::<TaskStatus>()
        .map_err(|err| AppError::bad_request(err.to_string()))?;

    let priority = optional_field(input.priority);
    if let Some(priority) = &priority {
        priority
            .parse::<Priority>()
            .map_err(|err| AppError::bad_request(err.to_string()))?;
    }

    Ok(TaskFields {
        name,
        assignee: optional_field(input.assignee),
        project_id,
        priority,
        status: status.to_string(),
        image: optional_field(input.image),
        description: optional_field(input.description),
    })
}
