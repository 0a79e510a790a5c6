// ABOUTME: Password hashing for seeded users
// ABOUTME: Produces Argon2id PHC strings; nothing in the system ever verifies them

use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};
use argon2::Argon2;

use crate::error::{SeederError, SeederResult};

/// Hash a password into a self-contained PHC string (Argon2id, default params)
pub fn hash_password(password: &str) -> SeederResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| SeederError::Hashing(e.to_string()))?;
    Ok(hash.to_string())
}
