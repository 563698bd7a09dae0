// Static credential store
// Decision: Built once at startup from configuration and never mutated, so it is shared
//           through Arc without locking
// Decision: Unknown users and unreadable hashes fail closed

use std::collections::HashMap;
use thiserror::Error;

use super::{
    config::{UserEntry, UserSecret},
    password::{hash_password, verify_password},
};

/// Errors raised while building the credential store
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("duplicate username {0:?} in credential table")]
    DuplicateUser(String),
    #[error("failed to hash password for {username:?}: {reason}")]
    Hash { username: String, reason: String },
}

/// A known user and their password hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub password_hash: String,
}

/// Read-only username -> password hash table
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    users: HashMap<String, UserRecord>,
}

impl CredentialStore {
    /// Build the store, hashing plaintext secrets with Argon2id.
    pub fn from_entries(entries: &[UserEntry]) -> Result<Self, CredentialError> {
        let mut users = HashMap::with_capacity(entries.len());

        for entry in entries {
            if users.contains_key(&entry.username) {
                return Err(CredentialError::DuplicateUser(entry.username.clone()));
            }

            let password_hash = match &entry.secret {
                UserSecret::Hashed(hash) => hash.clone(),
                UserSecret::Plain(plain) => {
                    hash_password(plain).map_err(|e| CredentialError::Hash {
                        username: entry.username.clone(),
                        reason: e.to_string(),
                    })?
                }
            };

            users.insert(
                entry.username.clone(),
                UserRecord {
                    username: entry.username.clone(),
                    password_hash,
                },
            );
        }

        Ok(Self { users })
    }

    /// Check a username/password pair against the table
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let Some(user) = self.users.get(username) else {
            tracing::debug!(username, "Unknown user");
            return false;
        };

        match verify_password(password, &user.password_hash) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!(username, "Stored password hash is unusable: {}", e);
                false
            }
        }
    }

    pub fn get(&self, username: &str) -> Option<&UserRecord> {
        self.users.get(username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
