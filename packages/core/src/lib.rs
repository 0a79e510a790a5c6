// ABOUTME: Shared constants and paths for Tasklet
// ABOUTME: Foundational package providing path resolution and env var names

pub mod constants;

// Re-export constants
pub use constants::{seed_db_file, tasklet_dir, tasks_file};
