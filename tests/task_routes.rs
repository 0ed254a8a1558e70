use axum::{
    body::{self, Body},
    http::{Request, StatusCode, header},
};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use tower::ServiceExt;

use taskboard::db::entities::{project, task};
use taskboard::test_helpers::{project_model, task_model, test_router, ts};

async fn send(db: DatabaseConnection, request: Request<Body>) -> axum::response::Response {
    test_router(db).oneshot(request).await.unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

const WIREFRAMES_FORM: &str = "name=Wireframes&assignee=Charlie&project_id=1&priority=Medium&status=Todo&image=&description=Create+initial+wireframes";

#[tokio::test]
async fn my_tasks_shows_every_task_with_its_project_name() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[
            task_model(2, 1, "Frontend", "In Progress", ts()),
            task_model(1, 1, "Wireframes", "Todo", ts()),
        ]])
        .append_query_results([[project_model(1, "Website Redesign", ts())]])
        .into_connection();

    let response = send(db, get("/my_tasks")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_string(response).await;
    assert!(page.contains("Frontend"));
    assert!(page.contains("Wireframes"));
    assert!(page.contains("Website Redesign"));
}

#[tokio::test]
async fn new_task_form_preselects_the_requested_project() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[
            project_model(2, "Mobile App", ts()),
            project_model(1, "Website Redesign", ts()),
        ]])
        .into_connection();

    let response = send(db, get("/tasks/new?project_id=2")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_string(response).await;
    assert!(page.contains(r#"<option value="2" selected>"#));
    assert!(!page.contains(r#"<option value="1" selected>"#));
}

#[tokio::test]
async fn new_task_form_ignores_an_unknown_preselect() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[project_model(1, "Website Redesign", ts())]])
        .into_connection();

    let response = send(db, get("/tasks/new?project_id=999")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!body_string(response).await.contains("selected"));
}

#[tokio::test]
async fn create_task_redirects_to_its_project_board() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // Project existence check, then INSERT .. RETURNING.
        .append_query_results([[project_model(1, "Website Redesign", ts())]])
        .append_query_results([[task_model(1, 1, "Wireframes", "Todo", ts())]])
        .into_connection();

    let response = send(db, post_form("/tasks/new", WIREFRAMES_FORM)).await;
    assert!(response.status().is_redirection());
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/project/1"
    );
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .expect("notice cookie missing");
    assert!(cookie.starts_with("notice=Task"));
}

#[tokio::test]
async fn create_task_for_a_nonexistent_project_is_a_400() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<project::Model>::new()])
        .into_connection();

    let response = send(db, post_form("/tasks/new", WIREFRAMES_FORM)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(response).await.contains("project does not exist"));
}

#[tokio::test]
async fn create_task_without_a_status_is_a_400() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let response = send(
        db,
        post_form("/tasks/new", "name=Wireframes&project_id=1&status="),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(response).await.contains("status is required"));
}

#[tokio::test]
async fn edit_form_for_a_missing_task_is_a_404() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<task::Model>::new()])
        .into_connection();

    let response = send(db, get("/tasks/999999/edit")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn edit_form_is_prefilled_and_selects_the_owning_project() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[task_model(1, 1, "Wireframes", "Todo", ts())]])
        .append_query_results([[
            project_model(2, "Mobile App", ts()),
            project_model(1, "Website Redesign", ts()),
        ]])
        .into_connection();

    let response = send(db, get("/tasks/1/edit")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_string(response).await;
    assert!(page.contains("Edit Task"));
    assert!(page.contains(r#"value="Wireframes""#));
    assert!(page.contains(r#"<option value="1" selected>"#));
    assert!(page.contains(r#"<option value="Todo" selected>"#));
}

#[tokio::test]
async fn update_task_redirects_to_its_project_board() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // Project existence check, task fetch, UPDATE .. RETURNING.
        .append_query_results([[project_model(1, "Website Redesign", ts())]])
        .append_query_results([[task_model(1, 1, "Wireframes", "Todo", ts())]])
        .append_query_results([[task_model(1, 1, "Wireframes", "Done", ts())]])
        .into_connection();

    let response = send(db, post_form("/tasks/1/edit", WIREFRAMES_FORM)).await;
    assert!(response.status().is_redirection());
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/project/1"
    );
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .expect("notice cookie missing");
    assert!(cookie.contains("updated"));
}
