use sea_orm::Set;
use serde::Deserialize;

use crate::{
    db::dao::{DaoBase, ProjectDao},
    db::entities::project,
    error::AppError,
    services::optional_field,
    types::Priority,
};

/// The project form body. Every field is optional at the wire level so a
/// missing field surfaces as a validation error, not a deserialization
/// fault.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub manager: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
}

struct ProjectFields {
    name: String,
    topic: Option<String>,
    manager: Option<String>,
    duration: Option<String>,
    priority: Option<String>,
    image: Option<String>,
    description: Option<String>,
}

#[derive(Clone)]
pub struct ProjectService {
    project_dao: ProjectDao,
}

impl ProjectService {
    pub fn new(project_dao: ProjectDao) -> Self {
        Self { project_dao }
    }

    pub async fn create(&self, input: ProjectInput) -> Result<project::Model, AppError> {
        let fields = validated(input)?;
        let model = project::ActiveModel {
            name: Set(fields.name),
            topic: Set(fields.topic),
            manager: Set(fields.manager),
            duration: Set(fields.duration),
            priority: Set(fields.priority),
            image: Set(fields.image),
            description: Set(fields.description),
            ..Default::default()
        };
        Ok(self.project_dao.create(model).await?)
    }

    /// Overwrites every mutable field unconditionally; the form always
    /// submits the full set.
    pub async fn update(&self, id: i32, input: ProjectInput) -> Result<project::Model, AppError> {
        let fields = validated(input)?;
        Ok(self
            .project_dao
            .update(id, move |active| overwrite(active, fields))
            .await?)
    }

    pub async fn list_all(&self) -> Result<Vec<project::Model>, AppError> {
        Ok(self.project_dao.list_all().await?)
    }

    pub async fn require(&self, id: i32) -> Result<project::Model, AppError> {
        Ok(self.project_dao.find_by_id(id).await?)
    }
}

// Every mutable column is written unconditionally; a field left empty on
// the form clears the stored value rather than preserving it.
fn overwrite(active: &mut project::ActiveModel, fields: ProjectFields) {
    active.name = Set(fields.name);
    active.topic = Set(fields.topic);
    active.manager = Set(fields.manager);
    active.duration = Set(fields.duration);
    active.priority = Set(fields.priority);
    active.image = Set(fields.image);
    active.description = Set(fields.description);
}

fn validated(input: ProjectInput) -> Result<ProjectFields, AppError> {
    let name = input.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::bad_request("name is required"));
    }

    let priority = optional_field(input.priority);
    if let Some(priority) = &priority {
        priority
            .parse::<Priority>()
            .map_err(|err| AppError::bad_request(err.to_string()))?;
    }

    Ok(ProjectFields {
        name,
        topic: optional_field(input.topic),
        manager: optional_field(input.manager),
        duration: optional_field(input.duration),
        priority,
        image: optional_field(input.image),
        description: optional_field(input.description),
    })
}
