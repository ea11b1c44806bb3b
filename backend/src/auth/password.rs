//! Password hashing using PBKDF2-HMAC-SHA256
//!
//! Provides salted password hashing and constant-time verification.
//!
//! # Performance Considerations
//!
//! PBKDF2 at 310,000 rounds is intentionally CPU-intensive. Async callers
//! should use the `*_async` variants, which run on the blocking thread pool.

use anyhow::{anyhow, Result};
use ring::pbkdf2;
use ring::rand::{SecureRandom, SystemRandom};
use std::fmt;
use std::num::NonZeroU32;

/// Salt length in bytes
pub const SALT_LEN: usize = 16;
/// Derived key length in bytes
pub const HASH_LEN: usize = 32;
/// PBKDF2 round count
pub const PBKDF2_ITERATIONS: u32 = 310_000;

static PBKDF2_ALG: pbkdf2::Algorithm = pbkdf2::PBKDF2_HMAC_SHA256;

fn iterations() -> NonZeroU32 {
    NonZeroU32::new(PBKDF2_ITERATIONS).unwrap_or(NonZeroU32::MIN)
}

/// Salt and derived key for one password
///
/// Immutable once created. Only a fresh `PasswordService::hash` produces a
/// new one.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    salt: [u8; SALT_LEN],
    hash: [u8; HASH_LEN],
}

impl Credential {
    /// Rebuild a credential from stored columns
    pub fn from_parts(salt: &[u8], hash: &[u8]) -> Result<Self> {
        let salt: [u8; SALT_LEN] = salt
            .try_into()
            .map_err(|_| anyhow!("Stored salt has length {}, expected {}", salt.len(), SALT_LEN))?;
        let hash: [u8; HASH_LEN] = hash
            .try_into()
            .map_err(|_| anyhow!("Stored hash has length {}, expected {}", hash.len(), HASH_LEN))?;
        Ok(Self { salt, hash })
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    pub fn hash(&self) -> &[u8] {
        &self.hash
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential").finish_non_exhaustive()
    }
}

/// Password hashing service
pub struct PasswordService;

impl PasswordService {
    /// Hash a password with a fresh random salt (blocking operation)
    ///
    /// Fails only if the system entropy source fails.
    pub fn hash(password: &str) -> Result<Credential> {
        let mut salt = [0u8; SALT_LEN];
        SystemRandom::new()
            .fill(&mut salt)
            .map_err(|_| anyhow!("Failed to generate password salt"))?;

        let mut hash = [0u8; HASH_LEN];
        pbkdf2::derive(PBKDF2_ALG, iterations(), &salt, password.as_bytes(), &mut hash);

        Ok(Credential { salt, hash })
    }

    /// Hash a password asynchronously (non-blocking)
    ///
    /// Spawns the CPU-intensive work on a blocking thread pool,
    /// preventing it from blocking the async runtime.
    pub async fn hash_async(password: String) -> Result<Credential> {
        tokio::task::spawn_blocking(move || Self::hash(&password))
            .await
            .map_err(|e| anyhow!("Task join error: {}", e))?
    }

    /// Verify a password against a stored credential (blocking operation)
    ///
    /// Re-derives with the stored salt; the comparison runs in constant time.
    pub fn verify(password: &str, credential: &Credential) -> bool {
        pbkdf2::verify(
            PBKDF2_ALG,
            iterations(),
            &credential.salt,
            password.as_bytes(),
            &credential.hash,
        )
        .is_ok()
    }

    /// Verify a password asynchronously (non-blocking)
    pub async fn verify_async(password: String, credential: Credential) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &credential))
            .await
            .map_err(|e| anyhow!("Task join error: {}", e))
    }
}
