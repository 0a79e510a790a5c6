// ABOUTME: HTTP request handlers for task operations
// ABOUTME: CRUD over the file-backed task store

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
    Json,
};
use tracing::{error, info};

use tasklet_tasks::{TaskCreateInput, TaskUpdateInput};

use crate::response::{
    store_error_response, MessageResponse, TaskListResponse, TaskResponse, TASK_DELETED,
};
use crate::state::AppState;

/// List all tasks
pub async fn list_tasks(State(state): State<AppState>) -> impl IntoResponse {
    info!("Listing all tasks");

    match state.tasks.list().await {
        Ok(tasks) => {
            (StatusCode::OK, ResponseJson(TaskListResponse { tasks })).into_response()
        }
        Err(e) => {
            error!("Failed to list tasks: {}", e);
            store_error_response(&e)
        }
    }
}

/// Create a new task from the request body; the id is assigned by the store
pub async fn create_task(
    State(state): State<AppState>,
    Json(input): Json<TaskCreateInput>,
) -> impl IntoResponse {
    info!("Creating task '{}'", input.title);

    match state.tasks.create(input).await {
        Ok(task) => (StatusCode::CREATED, ResponseJson(TaskResponse { task })).into_response(),
        Err(e) => {
            error!("Failed to create task: {}", e);
            store_error_response(&e)
        }
    }
}

/// Get a single task by id
pub async fn get_task(State(state): State<AppState>, Path(id): Path<u64>) -> impl IntoResponse {
    info!("Getting task: {}", id);

    match state.tasks.get(id).await {
        Ok(task) => (StatusCode::OK, ResponseJson(TaskResponse { task })).into_response(),
        Err(e) => {
            error!("Failed to get task {}: {}", id, e);
            store_error_response(&e)
        }
    }
}

/// Replace title and description of an existing task
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(input): Json<TaskUpdateInput>,
) -> impl IntoResponse {
    info!("Updating task: {}", id);

    match state.tasks.update(id, input).await {
        Ok(task) => (StatusCode::OK, ResponseJson(TaskResponse { task })).into_response(),
        Err(e) => {
            error!("Failed to update task {}: {}", id, e);
            store_error_response(&e)
        }
    }
}

/// Delete a task by id
pub async fn delete_task(State(state): State<AppState>, Path(id): Path<u64>) -> impl IntoResponse {
    info!("Deleting task: {}", id);

    match state.tasks.delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            ResponseJson(MessageResponse {
                message: TASK_DELETED.to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to delete task {}: {}", id, e);
            store_error_response(&e)
        }
    }
}
