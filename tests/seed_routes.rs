use axum::{
    body::Body,
    http::{Request, header},
};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use tower::ServiceExt;

use taskboard::db::entities::project;
use taskboard::test_helpers::{project_model, task_model, test_router, ts};

async fn send(db: DatabaseConnection, request: Request<Body>) -> axum::response::Response {
    test_router(db).oneshot(request).await.unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn seed_populates_an_empty_database_and_redirects() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // Emptiness probe, then two project and two task inserts.
        .append_query_results([Vec::<project::Model>::new()])
        .append_query_results([[project_model(1, "Website Redesign", ts())]])
        .append_query_results([[project_model(2, "Mobile App", ts())]])
        .append_query_results([[task_model(1, 1, "Wireframes", "Todo", ts())]])
        .append_query_results([[task_model(2, 1, "Frontend", "In Progress", ts())]])
        .into_connection();

    let response = send(db, get("/seed")).await;
    assert!(response.status().is_redirection());
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/projects"
    );
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .expect("notice cookie missing");
    assert!(cookie.starts_with("notice=Seed"));
}

#[tokio::test]
async fn a_second_seed_call_inserts_nothing() {
    // Only the emptiness probe is mocked; any insert attempt would hit the
    // exhausted mock and fail the request.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[project_model(1, "Website Redesign", ts())]])
        .into_connection();

    let response = send(db, get("/seed")).await;
    assert!(response.status().is_redirection());
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .expect("notice cookie missing");
    assert!(cookie.starts_with("notice=Seed"));
}
