use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, FixedOffset, TimeZone};
use sea_orm::DatabaseConnection;

use crate::{
    config::AppConfig,
    db::entities::{project, task},
    routes::router,
    state::AppState,
};

pub fn ts() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .expect("offset should be valid")
        .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .single()
        .expect("timestamp should be valid")
}

pub fn project_model(id: i32, name: &str, created_at: DateTime<FixedOffset>) -> project::Model {
    project::Model {
        id,
        name: name.to_string(),
        topic: Some("Marketing".to_string()),
        manager: Some("Sam".to_string()),
        duration: Some("1 month".to_string()),
        priority: Some("High".to_string()),
        image: None,
        description: Some("Go-to-market".to_string()),
        created_at,
    }
}

pub fn task_model(
    id: i32,
    project_id: i32,
    name: &str,
    status: &str,
    created_at: DateTime<FixedOffset>,
) -> task::Model {
    task::Model {
        id,
        name: name.to_string(),
        assignee: Some("Charlie".to_string()),
        priority: Some("Medium".to_string()),
        status: Some(status.to_string()),
        image: None,
        description: None,
        created_at,
        project_id,
    }
}

pub fn test_state(db: DatabaseConnection) -> Arc<AppState> {
    let cfg = AppConfig::from_env().expect("load app config");
    AppState::new(cfg, db)
}

pub fn test_router(db: DatabaseConnection) -> Router {
    router(test_state(db))
}
