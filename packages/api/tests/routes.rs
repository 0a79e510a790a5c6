// ABOUTME: Router-level integration tests for the task and seeder endpoints
// ABOUTME: Exercises status codes and response envelopes over a temp-backed state

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use tasklet_api::{create_seeder_router, create_tasks_router, AppState};

async fn test_app() -> (TempDir, Router) {
    let dir = TempDir::new().unwrap();
    let state = AppState::init(dir.path().join("tasks.json"), dir.path().join("seed.db"))
        .await
        .unwrap();

    let app = Router::new()
        .nest("/tasks", create_tasks_router())
        .merge(create_seeder_router())
        .with_state(state);

    (dir, app)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json_body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_task_lifecycle_scenario() {
    let (_dir, app) = test_app().await;

    // Empty store lists no tasks
    let (status, body) = send(&app, Method::GET, "/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tasks"], json!([]));

    // Create A: id 1, description null
    let (status, body) = send(&app, Method::POST, "/tasks", Some(json!({"title": "A"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["task"], json!({"id": 1, "title": "A", "description": null}));

    // Create B: id 2
    let (status, body) = send(&app, Method::POST, "/tasks", Some(json!({"title": "B"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["task"]["id"], 2);

    // Get A back
    let (status, body) = send(&app, Method::GET, "/tasks/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["task"]["title"], "A");

    // Delete A
    let (status, body) = send(&app, Method::DELETE, "/tasks/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Task deleted successfully");

    // Only B remains
    let (status, body) = send(&app, Method::GET, "/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tasks"], json!([{"id": 2, "title": "B", "description": null}]));

    // A is gone
    let (status, body) = send(&app, Method::GET, "/tasks/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Task not found");
}

#[tokio::test]
async fn test_update_replaces_fields_and_keeps_id() {
    let (_dir, app) = test_app().await;

    send(&app, Method::POST, "/tasks", Some(json!({"title": "A", "description": "old"}))).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/tasks/1",
        Some(json!({"title": "A2", "description": "new"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["task"], json!({"id": 1, "title": "A2", "description": "new"}));

    let (_, body) = send(&app, Method::GET, "/tasks/1", None).await;
    assert_eq!(body["task"]["description"], "new");
}

#[tokio::test]
async fn test_unknown_id_yields_not_found_with_fixed_message() {
    let (_dir, app) = test_app().await;

    for (method, uri, body) in [
        (Method::GET, "/tasks/99", None),
        (Method::PUT, "/tasks/99", Some(json!({"title": "X"}))),
        (Method::DELETE, "/tasks/99", None),
    ] {
        let (status, response) = send(&app, method, uri, body).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(response["error"], "Task not found");
    }
}

#[tokio::test]
async fn test_client_supplied_id_is_ignored_on_create() {
    let (_dir, app) = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/tasks",
        Some(json!({"id": 42, "title": "A"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["task"]["id"], 1);
}

#[tokio::test]
async fn test_body_without_title_is_rejected() {
    let (_dir, app) = test_app().await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/tasks",
        Some(json!({"description": "no title"})),
    )
    .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_seeder_endpoints_report_inserted_counts() {
    let (_dir, app) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/fake_users/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "3 fake users created");

    let (status, body) = send(&app, Method::GET, "/fake_products/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "2 fake products created");

    let (status, body) = send(&app, Method::GET, "/fake_orders/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "2 fake orders created");
}
