//! User account entity.
//!
//! # Invariants
//! - `username` is unique across all users.
//! - `password_hash` holds a salted bcrypt hash, never plaintext, and is
//!   never serialized.
//! - Accounts are immutable after registration in this scope.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for user accounts.
pub type UserId = Uuid;

/// A registered account that owns events and todos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable global ID referenced by `owner_uuid` on owned records.
    pub uuid: UserId,
    /// Unique login name.
    pub username: String,
    /// Salted bcrypt hash of the credential secret.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Free-text department label. May be empty.
    pub department: String,
}

impl User {
    /// Creates a new account record with a generated stable ID.
    ///
    /// The caller provides an already-hashed credential; this constructor
    /// never sees plaintext.
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            username: username.into(),
            password_hash: password_hash.into(),
            department: department.into(),
        }
    }
}
