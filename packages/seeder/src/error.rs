// ABOUTME: Error types for the seeder
// ABOUTME: Wraps sqlx, migration, filesystem, and hashing failures

use thiserror::Error;

/// Seeder errors
#[derive(Error, Debug)]
pub enum SeederError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Password hashing error: {0}")]
    Hashing(String),
}

pub type SeederResult<T> = Result<T, SeederError>;
