use std::collections::HashMap;
use std::sync::Arc;

use askama::Template;
use axum::{
    Form, Router,
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Response,
    routing::get,
};
use serde::Deserialize;

use crate::{
    db::entities::project,
    error::AppError,
    flash,
    services::{ServiceContext, task_service::TaskInput},
    state::AppState,
    types::{Priority, TaskStatus},
};

use super::{SelectOption, label_options, render};

struct TaskGridCard {
    name: String,
    project_name: String,
    status: String,
    priority: String,
}

struct ProjectOption {
    id: i32,
    name: String,
    selected: bool,
}

#[derive(Template)]
#[template(path = "my_tasks.html")]
struct MyTasksTemplate {
    title: String,
    notice: String,
    tasks: Vec<TaskGridCard>,
}

#[derive(Template)]
#[template(path = "task_form.html")]
struct TaskFormTemplate {
    title: String,
    notice: String,
    heading: &'static str,
    name: String,
    assignee: String,
    image: String,
    description: String,
    projects: Vec<ProjectOption>,
    statuses: Vec<SelectOption>,
    priorities: Vec<SelectOption>,
}

#[derive(Debug, Deserialize)]
struct NewTaskQuery {
    project_id: Option<i32>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/my_tasks", get(my_tasks))
        .route("/tasks/new", get(new_task_form).post(create_task))
        .route(
            "/tasks/{task_id}/edit",
            get(edit_task_form).post(update_task),
        )
        .with_state(state)
}

async fn my_tasks(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let notice = flash::take(&headers);
    let services = ServiceContext::from_state(state.as_ref());
    let tasks = services.task().list_all().await?;
    let project_names: HashMap<i32, String> = services
        .project()
        .list_all()
        .await?
        .into_iter()
        .map(|p| (p.id, p.name))
        .collect();

    let template = MyTasksTemplate {
        title: "My Tasks".to_string(),
        notice: notice.clone().unwrap_or_default(),
        tasks: tasks
            .into_iter()
            .map(|t| TaskGridCard {
                name: t.name,
                project_name: project_names.get(&t.project_id).cloned().unwrap_or_default(),
                status: t.status.unwrap_or_default(),
                priority: t.priority.unwrap_or_default(),
            })
            .collect(),
    };
    render(template, notice)
}

async fn new_task_form(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NewTaskQuery>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let notice = flash::take(&headers);
    let projects = ServiceContext::from_state(state.as_ref())
        .project()
        .list_all()
        .await?;

    // An unknown preselect id is silently ignored.
    let selected = query
        .project_id
        .filter(|id| projects.iter().any(|p| p.id == *id));
    let current = TaskInput {
        project_id: selected,
        ..TaskInput::default()
    };
    let template = task_form("New Task", notice.clone(), current, &projects);
    render(template, notice)
}

async fn create_task(
    State(state): State<Arc<AppState>>,
    Form(input): Form<TaskInput>,
) -> Result<Response, AppError> {
    let task = ServiceContext::from_state(state.as_ref())
        .task()
        .create(input)
        .await?;
    Ok(flash::redirect_with_notice(
        &format!("/project/{}", task.project_id),
        "Task created!",
    ))
}

async fn edit_task_form(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<i32>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let notice = flash::take(&headers);
    let services = ServiceContext::from_state(state.as_ref());
    let task = services.task().require(task_id).await?;
    let projects = services.project().list_all().await?;

    let current = TaskInput {
        name: task.name,
        assignee: task.assignee.unwrap_or_default(),
        project_id: Some(task.project_id),
        priority: task.priority.unwrap_or_default(),
        status: task.status.unwrap_or_default(),
        image: task.image.unwrap_or_default(),
        description: task.description.unwrap_or_default(),
    };
    let template = task_form("Edit Task", notice.clone(), current, &projects);
    render(template, notice)
}

async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<i32>,
    Form(input): Form<TaskInput>,
) -> Result<Response, AppError> {
    let task = ServiceContext::from_state(state.as_ref())
        .task()
        .update(task_id, input)
        .await?;
    Ok(flash::redirect_with_notice(
        &format!("/project/{}", task.project_id),
        "Task updated!",
    ))
}

fn task_form(
    heading: &'static str,
    notice: Option<String>,
    current: TaskInput,
    projects: &[project::Model],
) -> TaskFormTemplate {
    TaskFormTemplate {
        title: heading.to_string(),
        notice: notice.unwrap_or_default(),
        heading,
        projects: projects
            .iter()
            .map(|p| ProjectOption {
                id: p.id,
                name: p.name.clone(),
                selected: current.project_id == Some(p.id),
            })
            .collect(),
        statuses: label_options(TaskStatus::ALL.map(|s| s.as_str()), &current.status),
        priorities: label_options(Priority::ALL.map(|p| p.as_str()), &current.priority),
        name: current.name,
        assignee: current.assignee,
        image: current.image,
        description: current.description,
    }
}
