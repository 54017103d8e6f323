//! Todo repository contract and SQLite implementation.
//!
//! # Invariants
//! - Write paths call `Todo::validate()` before SQL mutations.
//! - `active_on_day` only ever returns rows with `completed = 0`.
//! - Completion matches the row by id+owner without filtering on the
//!   current flag, so completing twice stays a truthful no-op.

use crate::model::todo::{Todo, TodoId};
use crate::model::user::UserId;
use crate::repo::{parse_stored_flag, parse_stored_uuid, RepoResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};

const TODO_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    date,
    completed,
    owner_uuid
FROM todos";

/// Repository interface for daily todos.
pub trait TodoRepository {
    /// Persists one new todo and returns its stable id.
    fn create_todo(&self, todo: &Todo) -> RepoResult<TodoId>;
    /// Gets one todo by id, scoped to `owner`. Completed rows included.
    fn get_todo(&self, id: TodoId, owner: UserId) -> RepoResult<Option<Todo>>;
    /// Sets the terminal `completed` flag. Returns whether a row matched.
    fn complete_todo(&self, id: TodoId, owner: UserId) -> RepoResult<bool>;
    /// Lists open todos of `owner` for exactly `day`.
    fn active_on_day(&self, owner: UserId, day: NaiveDate) -> RepoResult<Vec<Todo>>;
}

/// SQLite-backed todo repository.
pub struct SqliteTodoRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTodoRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TodoRepository for SqliteTodoRepository<'_> {
    fn create_todo(&self, todo: &Todo) -> RepoResult<TodoId> {
        todo.validate()?;

        self.conn.execute(
            "INSERT INTO todos (uuid, title, date, completed, owner_uuid)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                todo.uuid.to_string(),
                todo.title.as_str(),
                todo.date,
                i64::from(todo.completed),
                todo.owner_uuid.to_string(),
            ],
        )?;

        Ok(todo.uuid)
    }

    fn get_todo(&self, id: TodoId, owner: UserId) -> RepoResult<Option<Todo>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TODO_SELECT_SQL}
             WHERE uuid = ?1
               AND owner_uuid = ?2;"
        ))?;

        let mut rows = stmt.query(params![id.to_string(), owner.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_todo_row(row)?));
        }

        Ok(None)
    }

    fn complete_todo(&self, id: TodoId, owner: UserId) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE todos
             SET
                completed = 1,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?1
               AND owner_uuid = ?2;",
            params![id.to_string(), owner.to_string()],
        )?;

        Ok(changed > 0)
    }

    fn active_on_day(&self, owner: UserId, day: NaiveDate) -> RepoResult<Vec<Todo>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TODO_SELECT_SQL}
             WHERE owner_uuid = ?1
               AND date = ?2
               AND completed = 0
             ORDER BY created_at ASC, uuid ASC;"
        ))?;

        let mut rows = stmt.query(params![owner.to_string(), day])?;
        let mut todos = Vec::new();

        while let Some(row) = rows.next()? {
            todos.push(parse_todo_row(row)?);
        }

        Ok(todos)
    }
}

fn parse_todo_row(row: &Row<'_>) -> RepoResult<Todo> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = parse_stored_uuid(&uuid_text, "todos.uuid")?;

    let owner_text: String = row.get("owner_uuid")?;
    let owner_uuid = parse_stored_uuid(&owner_text, "todos.owner_uuid")?;

    let completed = parse_stored_flag(row.get("completed")?, "todos.completed")?;

    let todo = Todo {
        uuid,
        title: row.get("title")?,
        date: row.get("date")?,
        completed,
        owner_uuid,
    };
    todo.validate()?;
    Ok(todo)
}
