// ABOUTME: File-backed task store providing CRUD operations
// ABOUTME: Persists tasks as a JSON document, reloaded on every operation

pub mod error;
pub mod store;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use store::TaskStore;
pub use types::{Task, TaskCreateInput, TaskUpdateInput};
