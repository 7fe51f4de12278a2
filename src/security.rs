//! Admin credential check and session handling
//!
//! The admin password is never held in the clear: it is stored as a
//! salted PBKDF2-HMAC-SHA256 digest and verified by re-deriving. A
//! successful login yields a short-lived session token.

use chrono::{DateTime, Duration, Utc};
use hmac::Hmac;
use pbkdf2::pbkdf2;
use rand::RngCore;
use sha2::Sha256;
use uuid::Uuid;

pub const SALT_LEN: usize = 16;
pub const KEY_LEN: usize = 32;
pub const PBKDF2_ROUNDS: u32 = 100_000;

/// Sessions expire after an hour of wall-clock time.
pub const SESSION_TTL_MINUTES: i64 = 60;

#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials,
    NotLoggedIn,
    SessionExpired,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid credentials"),
            AuthError::NotLoggedIn => write!(f, "Not logged in"),
            AuthError::SessionExpired => write!(f, "Session expired"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Salted password digest, hex-encoded for storage.
#[derive(Debug, Clone)]
pub struct PasswordHash {
    pub salt: String,
    pub hash: String,
    pub rounds: u32,
}

impl PasswordHash {
    /// Hash a password with a fresh random salt.
    pub fn derive(password: &str) -> Self {
        let mut salt = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);

        let hash = derive_key(password, &salt, PBKDF2_ROUNDS);
        Self {
            salt: hex::encode(salt),
            hash: hex::encode(hash),
            rounds: PBKDF2_ROUNDS,
        }
    }

    /// Re-derive with the stored salt and compare digests.
    pub fn verify(&self, password: &str) -> bool {
        let salt = match hex::decode(&self.salt) {
            Ok(salt) => salt,
            Err(_) => return false,
        };
        let derived = derive_key(password, &salt, self.rounds);
        hex::encode(derived) == self.hash
    }
}

fn derive_key(password: &str, salt: &[u8], rounds: u32) -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    let _ = pbkdf2::<Hmac<Sha256>>(password.as_bytes(), salt, rounds, &mut key);
    key
}

/// A live admin session.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            token: Uuid::new_v4().to_string(),
            issued_at: now,
            expires_at: now + Duration::minutes(SESSION_TTL_MINUTES),
        }
    }

    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

impl Default for AdminSession {
    fn default() -> Self {
        Self::new()
    }
}
