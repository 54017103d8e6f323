//! Registration and credential verification.
//!
//! # Responsibility
//! - Create accounts with salted credential hashes.
//! - Verify login credentials without leaking which half was wrong.
//!
//! # Invariants
//! - Plaintext passwords never reach the repository layer.
//! - The duplicate-username check runs before any write; the schema UNIQUE
//!   constraint backstops it.
//! - `verify_credentials` does not distinguish an unknown username from a
//!   wrong password.

use crate::model::user::User;
use crate::model::ValidationError;
use crate::repo::user_repo::UserRepository;
use crate::repo::RepoError;
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]{1,64}$").expect("username pattern must compile"));

/// Errors from account use-case operations.
#[derive(Debug)]
pub enum AccountError {
    /// Username or password failed the registration policy.
    Validation(ValidationError),
    /// The requested username is already taken.
    DuplicateUsername(String),
    /// Credential hashing backend failure.
    PasswordHash(bcrypt::BcryptError),
    /// Repository-level failure.
    Repo(RepoError),
}

impl Display for AccountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateUsername(name) => write!(f, "username already taken: {name}"),
            Self::PasswordHash(err) => write!(f, "credential hashing failed: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AccountError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::PasswordHash(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::DuplicateUsername(_) => None,
        }
    }
}

impl From<ValidationError> for AccountError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<bcrypt::BcryptError> for AccountError {
    fn from(value: bcrypt::BcryptError) -> Self {
        Self::PasswordHash(value)
    }
}

impl From<RepoError> for AccountError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::DuplicateUsername(name) => Self::DuplicateUsername(name),
            other => Self::Repo(other),
        }
    }
}

/// Use-case service for account registration and login checks.
pub struct AccountService<R: UserRepository> {
    users: R,
}

impl<R: UserRepository> AccountService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(users: R) -> Self {
        Self { users }
    }

    /// Registers one new account.
    ///
    /// # Contract
    /// - Username must match `[A-Za-z0-9_.-]{1,64}`; password must be
    ///   non-empty. Violations are rejected with no state change.
    /// - A taken username fails with `DuplicateUsername` before any write;
    ///   the existing account is untouched.
    /// - The stored credential is a salted bcrypt hash.
    pub fn register(
        &self,
        username: &str,
        password: &str,
        department: &str,
    ) -> Result<User, AccountError> {
        let username = username.trim();
        if !USERNAME_RE.is_match(username) {
            return Err(ValidationError::InvalidUsername(username.to_string()).into());
        }
        if password.is_empty() {
            return Err(ValidationError::EmptyPassword.into());
        }

        if self.users.find_by_username(username)?.is_some() {
            warn!("event=register module=account status=rejected reason=duplicate_username");
            return Err(AccountError::DuplicateUsername(username.to_string()));
        }

        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;
        let user = User::new(username, password_hash, department);
        self.users.create_user(&user)?;

        info!(
            "event=register module=account status=ok user={}",
            user.uuid
        );
        Ok(user)
    }

    /// Checks a username/password pair.
    ///
    /// # Contract
    /// - `Ok(None)` for an unknown username or a wrong password, without
    ///   distinguishing the two.
    /// - `Ok(Some(user))` when the credentials match.
    pub fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, AccountError> {
        let Some(user) = self.users.find_by_username(username.trim())? else {
            return Ok(None);
        };

        if bcrypt::verify(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }
}
