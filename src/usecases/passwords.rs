use crate::common::error::{AppError, ServiceResult, unexpected};
use bcrypt::BcryptError;
use tracing::warn;

/// `$2a$`, `$2b$`, `$2x$` or `$2y$`, a two digit cost, `$`, then 53 chars.
const BCRYPT_HASH_LEN: usize = 60;

/// Passwords longer than bcrypt's 72 byte input are rejected instead of
/// being silently truncated.
pub fn hash(password: &str, cost: u32) -> ServiceResult<String> {
    match bcrypt::non_truncating_hash(password, cost) {
        Ok(hashed) => Ok(hashed),
        Err(BcryptError::Truncation(_)) => Err(AppError::UsersPasswordTooLong),
        Err(e) => unexpected(e),
    }
}

/// Accounts created before hashing was introduced still hold their
/// password in plain text; those are compared as-is.
pub fn verify(password: &str, stored: &str) -> ServiceResult<bool> {
    if !is_bcrypt_hash(stored) {
        warn!("Verifying a legacy plain-text password");
        return Ok(password == stored);
    }
    match bcrypt::non_truncating_verify(password, stored) {
        Ok(valid) => Ok(valid),
        // Never hashed, so it cannot match.
        Err(BcryptError::Truncation(_)) => Ok(false),
        Err(e) => unexpected(e),
    }
}

fn is_bcrypt_hash(stored: &str) -> bool {
    let bytes = stored.as_bytes();
    bytes.len() == BCRYPT_HASH_LEN
        && bytes.starts_with(b"$2")
        && matches!(bytes[2], b'a' | b'b' | b'x' | b'y')
        && bytes[3] == b'$'
        && bytes[4..6].iter().all(u8::is_ascii_digit)
        && bytes[6] == b'$'
        && bytes[7..]
            .iter()
            .all(|&c| c.is_ascii_alphanumeric() || c == b'.' || c == b'/')
}
