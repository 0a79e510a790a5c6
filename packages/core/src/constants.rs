// ABOUTME: Path resolution and environment variable name constants
// ABOUTME: Centralized definitions used across all Tasklet packages

use std::env;
use std::path::PathBuf;

// Port Configuration
pub const TASKLET_API_PORT: &str = "TASKLET_API_PORT";

// CORS Configuration
pub const CORS_ORIGIN: &str = "CORS_ORIGIN";

// Storage Configuration
pub const TASKLET_TASKS_FILE: &str = "TASKLET_TASKS_FILE";
pub const TASKLET_SEED_DB: &str = "TASKLET_SEED_DB";

// System Environment Variables
pub const HOME: &str = "HOME";

/// Get the path to the Tasklet directory (~/.tasklet)
pub fn tasklet_dir() -> PathBuf {
    // First try HOME environment variable (useful for tests)
    if let Ok(home) = env::var(HOME) {
        PathBuf::from(home).join(".tasklet")
    } else {
        // Fall back to dirs crate for normal usage
        dirs::home_dir()
            .expect("Unable to get home directory")
            .join(".tasklet")
    }
}

/// Get the path to the tasks file (~/.tasklet/tasks.json)
pub fn tasks_file() -> PathBuf {
    tasklet_dir().join("tasks.json")
}

/// Get the path to the seeder database (~/.tasklet/seed.db)
pub fn seed_db_file() -> PathBuf {
    tasklet_dir().join("seed.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_live_under_tasklet_dir() {
        let dir = tasklet_dir();
        assert!(dir.ends_with(".tasklet"));
        assert_eq!(tasks_file(), dir.join("tasks.json"));
        assert_eq!(seed_db_file(), dir.join("seed.db"));
    }
}
