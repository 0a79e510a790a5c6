// ABOUTME: Fake-data generator seeding a relational schema in SQLite
// ABOUTME: Provides pool initialization, schema migration, and patterned inserts

pub mod db;
pub mod error;
pub mod generator;
pub mod password;

pub use db::init_pool;
pub use error::{SeederError, SeederResult};
pub use generator::FakeDataGenerator;
