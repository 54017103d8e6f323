//! Daily to-do entity.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another todo.
//! - `completed` is terminal; completed todos are retained, not removed,
//!   and are excluded from the active-day query.

use super::user::UserId;
use super::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for todos.
pub type TodoId = Uuid;

/// A to-do item attached to a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Stable global ID.
    pub uuid: TodoId,
    /// Display title. Trimmed on construction, never blank once validated.
    pub title: String,
    /// Calendar day this todo belongs to. A day, not a timestamp.
    pub date: NaiveDate,
    /// Terminal completion flag.
    pub completed: bool,
    /// Owning user.
    pub owner_uuid: UserId,
}

impl Todo {
    /// Creates a new open todo with a generated stable ID.
    pub fn new(owner_uuid: UserId, title: impl Into<String>, date: NaiveDate) -> Self {
        let title: String = title.into();
        Self {
            uuid: Uuid::new_v4(),
            title: title.trim().to_string(),
            date,
            completed: false,
            owner_uuid,
        }
    }

    /// Checks domain invariants. Called by write paths before persistence.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Marks this todo as done. Terminal.
    pub fn complete(&mut self) {
        self.completed = true;
    }

    /// Returns whether this todo still shows up in the active-day query.
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}
