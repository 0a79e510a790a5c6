// ABOUTME: TaskStore implementation over a flat JSON document
// ABOUTME: Every operation reloads from disk; mutations rewrite the full file

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::types::{Task, TaskCreateInput, TaskUpdateInput};

/// CRUD access to the task collection, backed by a single JSON file.
///
/// The store holds no in-memory copy across operations: each call reads the
/// full document, works on that snapshot, and (for mutations) writes the full
/// document back. The read-modify-write sequence is not isolated from
/// concurrent operations on the same file; the store assumes it is the only
/// writer.
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Create a store over the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensures the parent directory and the tasks file exist
    pub async fn ensure_file(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                debug!("Creating tasks directory: {:?}", parent);
                fs::create_dir_all(parent).await?;
            }
        }

        if !self.path.exists() {
            debug!("Creating tasks file: {:?}", self.path);
            let empty: Vec<Task> = Vec::new();
            let json_content = serde_json::to_string_pretty(&empty)?;
            fs::write(&self.path, json_content).await?;
        }

        Ok(())
    }

    /// Reads the full collection from disk. A missing or malformed file is an
    /// error; stored data is never defaulted away.
    async fn load(&self) -> StoreResult<Vec<Task>> {
        debug!("Reading tasks from: {:?}", self.path);
        let content = fs::read_to_string(&self.path).await?;
        let tasks = serde_json::from_str::<Vec<Task>>(&content)?;
        debug!("Loaded {} tasks", tasks.len());
        Ok(tasks)
    }

    /// Writes the full collection back to disk
    async fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        debug!("Writing {} tasks to: {:?}", tasks.len(), self.path);
        let json_content = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, json_content).await?;
        Ok(())
    }

    /// Returns the full collection, verbatim
    pub async fn list(&self) -> StoreResult<Vec<Task>> {
        let tasks = self.load().await?;
        debug!("Listed {} tasks", tasks.len());
        Ok(tasks)
    }

    /// Appends a new task with id = current count + 1 and persists
    pub async fn create(&self, input: TaskCreateInput) -> StoreResult<Task> {
        let mut tasks = self.load().await?;
        let task = Task {
            id: tasks.len() as u64 + 1,
            title: input.title,
            description: input.description,
        };
        tasks.push(task.clone());
        self.save(&tasks).await?;
        debug!("Created task: {}", task.id);
        Ok(task)
    }

    /// Returns the first task with the given id
    pub async fn get(&self, id: u64) -> StoreResult<Task> {
        let tasks = self.load().await?;
        let task = tasks
            .into_iter()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        debug!("Found task: {}", id);
        Ok(task)
    }

    /// Overwrites title and description of the task with the given id and
    /// persists. The stored id is never altered.
    pub async fn update(&self, id: u64, input: TaskUpdateInput) -> StoreResult<Task> {
        let mut tasks = self.load().await?;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        task.title = input.title;
        task.description = input.description;
        let updated = task.clone();
        self.save(&tasks).await?;
        debug!("Updated task: {}", id);
        Ok(updated)
    }

    /// Removes the first task with the given id and persists
    pub async fn delete(&self, id: u64) -> StoreResult<()> {
        let mut tasks = self.load().await?;
        let position = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        tasks.remove(position);
        self.save(&tasks).await?;
        debug!("Deleted task: {}", id);
        Ok(())
    }
}
