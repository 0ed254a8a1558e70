use std::sync::Arc;

use axum::{Router, extract::State, response::Response, routing::get};

use crate::{error::AppError, flash, services::ServiceContext, state::AppState};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().route("/seed", get(seed)).with_state(state)
}

/// The notice fires on every call; only the first call on an empty table
/// actually inserts anything.
async fn seed(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    ServiceContext::from_state(state.as_ref())
        .seed()
        .seed_demo_data()
        .await?;
    Ok(flash::redirect_with_notice("/projects", "Seed data inserted"))
}
