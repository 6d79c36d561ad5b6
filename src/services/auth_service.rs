//! Admin authentication for LinkHub.
//!
//! Gate for the admin surface only — a password check and a boolean flag
//! record in durable storage, not real authorization. The flag key sits
//! outside the store's two collection keys.

use crate::storage::{KeyValueStorage, AUTH_KEY};
use crate::types::errors::AuthError;

/// Fallback admin password, matching the original deployment default.
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Trait defining admin authentication operations.
pub trait AuthServiceTrait {
    /// Checks the password; on success writes the flag record and
    /// returns `true`. A wrong password returns `false` (not an error).
    fn login(&mut self, password: &str) -> Result<bool, AuthError>;
    /// Clears the flag record.
    fn logout(&mut self) -> Result<(), AuthError>;
    /// Reads the flag record.
    fn is_authenticated(&self) -> Result<bool, AuthError>;
}

/// Auth service over an injected storage backend.
pub struct AuthService {
    storage: Box<dyn KeyValueStorage>,
    admin_password: String,
}

impl AuthService {
    /// Creates an auth service. `password_override` replaces the default
    /// admin password (e.g. from the `LINKHUB_ADMIN_PASSWORD` env var).
    pub fn new(storage: Box<dyn KeyValueStorage>, password_override: Option<String>) -> Self {
        Self {
            storage,
            admin_password: password_override
                .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string()),
        }
    }
}

impl AuthServiceTrait for AuthService {
    fn login(&mut self, password: &str) -> Result<bool, AuthError> {
        if password != self.admin_password {
            return Ok(false);
        }
        self.storage
            .set(AUTH_KEY, "true")
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        Ok(true)
    }

    fn logout(&mut self) -> Result<(), AuthError> {
        self.storage
            .remove(AUTH_KEY)
            .map_err(|e| AuthError::Storage(e.to_string()))
    }

    fn is_authenticated(&self) -> Result<bool, AuthError> {
        let flag = self
            .storage
            .get(AUTH_KEY)
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        Ok(flag.as_deref() == Some("true"))
    }
}
