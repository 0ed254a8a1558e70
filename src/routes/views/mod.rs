pub mod projects;
pub mod seed;
pub mod tasks;

use std::sync::Arc;

use askama::Template;
use axum::{
    Router,
    response::{Html, IntoResponse, Response},
};

use crate::{error::AppError, flash, state::AppState};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(projects::router(state.clone()))
        .merge(tasks::router(state.clone()))
        .merge(seed::router(state))
}

/// Render a page, clearing the flash cookie when the page consumed a
/// notice.
pub(crate) fn render<T: Template>(template: T, notice: Option<String>) -> Result<Response, AppError> {
    let rendered = template
        .render()
        .map_err(|err| AppError::internal(format!("failed to render page: {err}")))?;
    let response = Html(rendered).into_response();
    Ok(match notice {
        Some(_) => flash::cleared(response),
        None => response,
    })
}

/// Fixed-label `<select>` entry.
pub(crate) struct SelectOption {
    pub value: &'static str,
    pub selected: bool,
}

pub(crate) fn label_options<const N: usize>(
    labels: [&'static str; N],
    current: &str,
) -> Vec<SelectOption> {
    labels
        .into_iter()
        .map(|value| SelectOption {
            value,
            selected: value == current,
        })
        .collect()
}
