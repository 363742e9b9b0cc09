//! Password hashing.
//!
//! Hashes are Argon2 PHC strings (`$argon2id$v=19$...`) carrying their own
//! salt, so only the string is stored in `users.password_hash`.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::{CabinetError, Result};

/// Hashes `plain` with a freshly generated salt.
pub fn hash_password(plain: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| CabinetError::PasswordHash(e.to_string()))
}

/// Checks `plain` against a stored PHC string. A malformed stored hash is an
/// error; a wrong password is `Ok(false)`.
pub fn verify_password(plain: &str, stored_hash: &str) -> Result<bool> {
    let parsed =
        PasswordHash::new(stored_hash).map_err(|e| CabinetError::PasswordHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}
