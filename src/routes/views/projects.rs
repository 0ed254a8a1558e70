use std::sync::Arc;

use askama::Template;
use axum::{
    Form, Router,
    extract::{Path, State},
    http::HeaderMap,
    response::{Redirect, Response},
    routing::get,
};

use crate::{
    db::entities::task,
    error::AppError,
    flash,
    services::{ServiceContext, project_service::ProjectInput},
    state::AppState,
    types::{Priority, TaskStatus},
};

use super::{SelectOption, label_options, render};

struct ProjectCard {
    id: i32,
    name: String,
    topic: String,
    priority: String,
    image: String,
}

struct ProjectHeader {
    id: i32,
    name: String,
    description: String,
}

struct TaskCard {
    id: i32,
    name: String,
    assignee: String,
    priority: String,
}

struct BoardColumn {
    status: &'static str,
    tasks: Vec<TaskCard>,
}

#[derive(Template)]
#[template(path = "projects.html")]
struct ProjectsTemplate {
    title: String,
    notice: String,
    projects: Vec<ProjectCard>,
}

#[derive(Template)]
#[template(path = "project_detail.html")]
struct ProjectDetailTemplate {
    title: String,
    notice: String,
    project: ProjectHeader,
    columns: Vec<BoardColumn>,
}

#[derive(Template)]
#[template(path = "project_form.html")]
struct ProjectFormTemplate {
    title: String,
    notice: String,
    heading: &'static str,
    name: String,
    topic: String,
    manager: String,
    duration: String,
    image: String,
    description: String,
    priorities: Vec<SelectOption>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/projects", get(list_projects))
        .route("/project/{project_id}", get(project_detail))
        .route("/projects/new", get(new_project_form).post(create_project))
        .route(
            "/projects/{project_id}/edit",
            get(edit_project_form).post(update_project),
        )
        .with_state(state)
}

async fn home() -> Redirect {
    Redirect::to("/projects")
}

async fn list_projects(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let notice = flash::take(&headers);
    let projects = ServiceContext::from_state(state.as_ref())
        .project()
        .list_all()
        .await?;

    let template = ProjectsTemplate {
        title: "Projects".to_string(),
        notice: notice.clone().unwrap_or_default(),
        projects: projects
            .into_iter()
            .map(|p| ProjectCard {
                id: p.id,
                name: p.name,
                topic: p.topic.unwrap_or_default(),
                priority: p.priority.unwrap_or_default(),
                image: p.image.unwrap_or_default(),
            })
            .collect(),
    };
    render(template, notice)
}

async fn project_detail(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<i32>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let notice = flash::take(&headers);
    let services = ServiceContext::from_state(state.as_ref());
    let project = services.project().require(project_id).await?;
    let tasks = services.task().list_by_project(project_id).await?;

    let template = ProjectDetailTemplate {
        title: project.name.clone(),
        notice: notice.clone().unwrap_or_default(),
        project: ProjectHeader {
            id: project.id,
            name: project.name,
            description: project.description.unwrap_or_default(),
        },
        columns: board_columns(tasks),
    };
    render(template, notice)
}

async fn new_project_form(headers: HeaderMap) -> Result<Response, AppError> {
    let notice = flash::take(&headers);
    let template = project_form("New Project", notice.clone(), ProjectInput::default());
    render(template, notice)
}

async fn create_project(
    State(state): State<Arc<AppState>>,
    Form(input): Form<ProjectInput>,
) -> Result<Response, AppError> {
    ServiceContext::from_state(state.as_ref())
        .project()
        .create(input)
        .await?;
    Ok(flash::redirect_with_notice("/projects", "Project created!"))
}

async fn edit_project_form(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<i32>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let notice = flash::take(&headers);
    let project = ServiceContext::from_state(state.as_ref())
        .project()
        .require(project_id)
        .await?;

    let current = ProjectInput {
        name: project.name,
        topic: project.topic.unwrap_or_default(),
        manager: project.manager.unwrap_or_default(),
        duration: project.duration.unwrap_or_default(),
        priority: project.priority.unwrap_or_default(),
        image: project.image.unwrap_or_default(),
        description: project.description.unwrap_or_default(),
    };
    let template = project_form("Edit Project", notice.clone(), current);
    render(template, notice)
}

async fn update_project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<i32>,
    Form(input): Form<ProjectInput>,
) -> Result<Response, AppError> {
    ServiceContext::from_state(state.as_ref())
        .project()
        .update(project_id, input)
        .await?;
    Ok(flash::redirect_with_notice("/projects", "Project updated!"))
}

fn project_form(
    heading: &'static str,
    notice: Option<String>,
    current: ProjectInput,
) -> ProjectFormTemplate {
    ProjectFormTemplate {
        title: heading.to_string(),
        notice: notice.unwrap_or_default(),
        heading,
        priorities: label_options(Priority::ALL.map(|p| p.as_str()), &current.priority),
        name: current.name,
        topic: current.topic,
        manager: current.manager,
        duration: current.duration,
        image: current.image,
        description: current.description,
    }
}

/// Partition tasks into the three fixed board columns; the incoming
/// newest-first order is preserved within each column.
fn board_columns(tasks: Vec<task::Model>) -> Vec<BoardColumn> {
    TaskStatus::ALL
        .into_iter()
        .map(|status| BoardColumn {
            status: status.as_str(),
            tasks: tasks
                .iter()
                .filter(|t| t.status.as_deref() == Some(status.as_str()))
                .map(|t| TaskCard {
                    id: t.id,
                    name: t.name.clone(),
                    assignee: t.assignee.clone().unwrap_or_default(),
                    priority: t.priority.clone().unwrap_or_default(),
                })
                .collect(),
        })
        .collect()
}
