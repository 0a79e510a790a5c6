// ABOUTME: Task type definitions
// ABOUTME: Structures for stored tasks and create/update payloads

use serde::{Deserialize, Serialize};

/// A single to-do record as persisted on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
}

/// Payload for creating a task. The id is assigned by the store; an id
/// supplied by the client is ignored because no such field exists here.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskCreateInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Payload for updating a task. Replaces title and description; the id of
/// the stored task is never altered.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskUpdateInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}
