//! User repository contract and SQLite implementation.
//!
//! # Invariants
//! - `users.username` uniqueness is enforced by the schema; the constraint
//!   violation surfaces as the semantic `DuplicateUsername` error.
//! - Account rows are insert-only in this scope.

use crate::model::user::{User, UserId};
use crate::repo::{parse_stored_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, ErrorCode, Row};

const USER_SELECT_SQL: &str = "SELECT
    uuid,
    username,
    password_hash,
    department
FROM users";

/// Repository interface for user accounts.
pub trait UserRepository {
    /// Persists one new account and returns its stable id.
    fn create_user(&self, user: &User) -> RepoResult<UserId>;
    /// Gets one account by id.
    fn get_user(&self, id: UserId) -> RepoResult<Option<User>>;
    /// Gets one account by exact username.
    fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn create_user(&self, user: &User) -> RepoResult<UserId> {
        let inserted = self.conn.execute(
            "INSERT INTO users (uuid, username, password_hash, department)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                user.uuid.to_string(),
                user.username.as_str(),
                user.password_hash.as_str(),
                user.department.as_str(),
            ],
        );

        match inserted {
            Ok(_) => Ok(user.uuid),
            Err(rusqlite::Error::SqliteFailure(err, Some(message)))
                if err.code == ErrorCode::ConstraintViolation
                    && message.contains("users.username") =>
            {
                Err(RepoError::DuplicateUsername(user.username.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn get_user(&self, id: UserId) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query(params![id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }

        Ok(None)
    }

    fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE username = ?1;"))?;

        let mut rows = stmt.query(params![username])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }

        Ok(None)
    }
}

fn parse_user_row(row: &Row<'_>) -> RepoResult<User> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = parse_stored_uuid(&uuid_text, "users.uuid")?;

    Ok(User {
        uuid,
        username: row.get("username")?,
        password_hash: row.get("password_hash")?,
        department: row.get("department")?,
    })
}
