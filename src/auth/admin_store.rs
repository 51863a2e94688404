//! Administrator Storage
//! Mission: Securely store and verify administrator credentials in memory

use crate::auth::models::Admin;
use anyhow::{Context, Result};
use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{info, warn};

/// Demo credentials seeded at startup so the API is usable out of the box.
const SEED_USERNAME: &str = "admin";
const SEED_SECRET: &str = "123456";

/// Registration failure
#[derive(Debug, PartialEq, Eq)]
pub enum RegisterError {
    AlreadyExists,
}

impl std::fmt::Display for RegisterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterError::AlreadyExists => write!(f, "Administrator already exists"),
        }
    }
}

impl std::error::Error for RegisterError {}

/// In-memory administrator store.
///
/// Secrets are stored as bcrypt hashes, never as plain text. All reads and
/// writes go through a single `RwLock` so concurrent registrations cannot
/// race the duplicate-username check.
pub struct AdminStore {
    admins: RwLock<HashMap<String, Admin>>,
}

impl AdminStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            admins: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store pre-seeded with the demo administrator
    pub fn with_seed_admin() -> Result<Self> {
        let store = Self::new();
        store
            .register(SEED_USERNAME, SEED_SECRET)
            .context("Failed to seed demo administrator")?;

        info!(
            "🔐 Demo administrator seeded (username: {}, secret: {})",
            SEED_USERNAME, SEED_SECRET
        );
        warn!("⚠️  REPLACE THE SEED ADMINISTRATOR IN PRODUCTION!");

        Ok(store)
    }

    /// Register a new administrator.
    ///
    /// Usernames are unique, compared by exact case-sensitive equality.
    /// Returns `RegisterError::AlreadyExists` on a duplicate.
    pub fn register(&self, username: &str, secret: &str) -> Result<Admin> {
        // Hash outside the write lock; the duplicate check is repeated
        // under the lock so the check-then-insert stays atomic.
        let secret_hash = hash(secret, DEFAULT_COST).context("Failed to hash secret")?;

        let mut admins = self.admins.write();
        if admins.contains_key(username) {
            return Err(RegisterError::AlreadyExists.into());
        }

        let admin = Admin {
            username: username.to_string(),
            secret_hash,
            created_at: Utc::now().to_rfc3339(),
        };
        admins.insert(username.to_string(), admin.clone());

        Ok(admin)
    }

    /// Verify a presented credential.
    ///
    /// Returns `None` for an unknown username and for a wrong secret alike;
    /// callers cannot distinguish which check failed.
    pub fn verify(&self, username: &str, secret: &str) -> Option<Admin> {
        let admin = self.admins.read().get(username).cloned()?;

        match verify(secret, &admin.secret_hash) {
            Ok(true) => Some(admin),
            _ => None,
        }
    }
}

impl Default for AdminStore {
    fn default() -> Self {
        Self::new()
    }
}
