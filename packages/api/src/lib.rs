// ABOUTME: HTTP API layer for Tasklet providing REST endpoints and routing
// ABOUTME: Integration layer over the task store and the fake-data seeder

use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub mod response;
pub mod seeder_handlers;
pub mod state;
pub mod tasks_handlers;

pub use state::AppState;

/// Creates the tasks API router (nested under /tasks)
pub fn create_tasks_router() -> Router<AppState> {
    Router::new()
        .route("/", get(tasks_handlers::list_tasks))
        .route("/", post(tasks_handlers::create_task))
        .route("/{id}", get(tasks_handlers::get_task))
        .route("/{id}", put(tasks_handlers::update_task))
        .route("/{id}", delete(tasks_handlers::delete_task))
}

/// Creates the seeder API router (mounted at the root, as the original service)
pub fn create_seeder_router() -> Router<AppState> {
    Router::new()
        .route(
            "/fake_users/{count}",
            get(seeder_handlers::create_fake_users),
        )
        .route(
            "/fake_products/{count}",
            get(seeder_handlers::create_fake_products),
        )
        .route(
            "/fake_orders/{count}",
            get(seeder_handlers::create_fake_orders),
        )
}
