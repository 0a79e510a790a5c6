// ABOUTME: Patterned fake-data inserts for users, products, and orders
// ABOUTME: Each seed call inserts `count` rows one by one, mirroring row indexes

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::SeederResult;
use crate::password::hash_password;

/// Inserts patterned fake rows into the seeder schema
pub struct FakeDataGenerator {
    pool: SqlitePool,
}

impl FakeDataGenerator {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert `count` fake users. Passwords are stored as Argon2id hashes;
    /// no endpoint ever verifies them.
    pub async fn seed_users(&self, count: u32) -> SeederResult<u32> {
        debug!("Seeding {} fake users", count);

        for i in 0..count {
            let password = hash_password(&format!("pass{}", i))?;
            sqlx::query(
                r#"
                INSERT INTO users (name, surname, email, password)
                VALUES (?, ?, ?, ?)
                "#,
            )
            .bind(format!("user{}", i))
            .bind(format!("user{}", i))
            .bind(format!("mail{}@mail.ru", i))
            .bind(password)
            .execute(&self.pool)
            .await?;
        }

        info!("Seeded {} fake users", count);
        Ok(count)
    }

    /// Insert `count` fake products with ascending prices
    pub async fn seed_products(&self, count: u32) -> SeederResult<u32> {
        debug!("Seeding {} fake products", count);

        for i in 0..count {
            sqlx::query(
                r#"
                INSERT INTO products (product_name, description, price)
                VALUES (?, ?, ?)
                "#,
            )
            .bind(format!("product{}", i))
            .bind(format!("desc{}", i))
            .bind(100.00 + i as f64)
            .execute(&self.pool)
            .await?;
        }

        info!("Seeded {} fake products", count);
        Ok(count)
    }

    /// Insert `count` fake orders referencing users/products by loop index.
    /// Order status is left to the column default ('In progress').
    pub async fn seed_orders(&self, count: u32) -> SeederResult<u32> {
        debug!("Seeding {} fake orders", count);

        for i in 0..count {
            sqlx::query(
                r#"
                INSERT INTO orders (user_id, product_id, order_date)
                VALUES (?, ?, ?)
                "#,
            )
            .bind(i as i64)
            .bind(i as i64)
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await?;
        }

        info!("Seeded {} fake orders", count);
        Ok(count)
    }
}
