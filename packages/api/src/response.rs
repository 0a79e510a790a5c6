// ABOUTME: Response envelopes and error-to-HTTP translation
// ABOUTME: Success bodies wrap payloads under "task", "tasks", or "message" keys

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use serde::Serialize;

use tasklet_seeder::SeederError;
use tasklet_tasks::{StoreError, Task};

/// Fixed message for the single domain error
pub const TASK_NOT_FOUND: &str = "Task not found";

/// Fixed confirmation message for deletions
pub const TASK_DELETED: &str = "Task deleted successfully";

#[derive(Serialize)]
pub struct TaskResponse {
    pub task: Task,
}

#[derive(Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Convert store errors to HTTP responses. NotFound carries the fixed
/// message; anything else is a fatal storage condition surfaced as 500.
pub fn store_error_response(error: &StoreError) -> Response {
    let (status, message) = match error {
        StoreError::NotFound(_) => (StatusCode::NOT_FOUND, TASK_NOT_FOUND),
        StoreError::Io(_) | StoreError::Json(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Storage error")
        }
    };

    (status, ResponseJson(ErrorResponse::new(message))).into_response()
}

/// Convert seeder errors to HTTP responses
pub fn seeder_error_response(error: &SeederError) -> Response {
    let message = match error {
        SeederError::Sqlx(_) | SeederError::Migration(_) => "Database error",
        SeederError::Io(_) | SeederError::Hashing(_) => "Internal server error",
    };

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ResponseJson(ErrorResponse::new(message)),
    )
        .into_response()
}
