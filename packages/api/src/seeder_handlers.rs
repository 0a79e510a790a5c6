// ABOUTME: HTTP request handlers for the fake-data seeder
// ABOUTME: Each endpoint inserts `count` patterned rows and reports a message

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
};
use tracing::{error, info};

use crate::response::{seeder_error_response, MessageResponse};
use crate::state::AppState;

/// Insert `count` fake users
pub async fn create_fake_users(
    State(state): State<AppState>,
    Path(count): Path<u32>,
) -> impl IntoResponse {
    info!("Creating {} fake users", count);

    match state.generator.seed_users(count).await {
        Ok(inserted) => (
            StatusCode::OK,
            ResponseJson(MessageResponse {
                message: format!("{} fake users created", inserted),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to seed users: {}", e);
            seeder_error_response(&e)
        }
    }
}

/// Insert `count` fake products
pub async fn create_fake_products(
    State(state): State<AppState>,
    Path(count): Path<u32>,
) -> impl IntoResponse {
    info!("Creating {} fake products", count);

    match state.generator.seed_products(count).await {
        Ok(inserted) => (
            StatusCode::OK,
            ResponseJson(MessageResponse {
                message: format!("{} fake products created", inserted),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to seed products: {}", e);
            seeder_error_response(&e)
        }
    }
}

/// Insert `count` fake orders
pub async fn create_fake_orders(
    State(state): State<AppState>,
    Path(count): Path<u32>,
) -> impl IntoResponse {
    info!("Creating {} fake orders", count);

    match state.generator.seed_orders(count).await {
        Ok(inserted) => (
            StatusCode::OK,
            ResponseJson(MessageResponse {
                message: format!("{} fake orders created", inserted),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to seed orders: {}", e);
            seeder_error_response(&e)
        }
    }
}
