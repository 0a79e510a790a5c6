// ABOUTME: Shared application state for API handlers
// ABOUTME: Holds the task store and the fake-data generator behind Arc handles

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use tasklet_seeder::{init_pool, FakeDataGenerator, SeederError};
use tasklet_tasks::{StoreError, TaskStore};

/// Startup errors from either backing store
#[derive(Error, Debug)]
pub enum StateError {
    #[error("Task store error: {0}")]
    Store(#[from] StoreError),
    #[error("Seeder error: {0}")]
    Seeder(#[from] SeederError),
}

/// Shared state for API handlers
#[derive(Clone)]
pub struct AppState {
    pub tasks: Arc<TaskStore>,
    pub generator: Arc<FakeDataGenerator>,
}

impl AppState {
    /// Initialize both services: ensure the tasks file exists and open the
    /// seeder database (running migrations).
    pub async fn init(tasks_path: PathBuf, seed_db_path: PathBuf) -> Result<Self, StateError> {
        let tasks = TaskStore::new(tasks_path);
        tasks.ensure_file().await?;

        let pool = init_pool(&seed_db_path).await?;
        let generator = FakeDataGenerator::new(pool);

        info!("Application state initialized");

        Ok(Self {
            tasks: Arc::new(tasks),
            generator: Arc::new(generator),
        })
    }
}
