use bcrypt::{DEFAULT_COST, hash, verify};

use crate::utils::errors::AppError;

/// Hash a plaintext password with bcrypt at the default work factor.
///
/// Each call salts independently, so hashing the same password twice
/// produces different encodings that both verify.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to hash password: {}", e)))
}

/// Check a plaintext password against a stored bcrypt hash.
///
/// A wrong password is `Ok(false)`; `Err` is reserved for hashes that
/// are not valid bcrypt encodings at all.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to verify password: {}", e)))
}
