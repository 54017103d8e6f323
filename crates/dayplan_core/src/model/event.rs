//! Calendar event entity.
//!
//! # Responsibility
//! - Define the event record and its lifecycle helpers.
//! - Enforce the interval invariant (`end_time >= start_time`).
//!
//! # Invariants
//! - `uuid` is stable and never reused for another event.
//! - `deleted` is the single source of truth for tombstone state.
//! - An edited event is superseded by a new record carrying `replaces`;
//!   the old record is tombstoned, never mutated in place.

use super::user::UserId;
use super::ValidationError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for calendar events.
pub type EventId = Uuid;

/// A single calendar entry owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Stable global ID used for linking and auditing.
    pub uuid: EventId,
    /// Display title. Trimmed on construction, never blank once validated.
    pub title: String,
    /// Naive local start instant.
    pub start_time: NaiveDateTime,
    /// Naive local end instant. Must not be earlier than `start_time`.
    pub end_time: NaiveDateTime,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Owning user. Every read and mutation is scoped to this id.
    pub owner_uuid: UserId,
    /// Soft-delete tombstone. Tombstoned events never reappear in queries.
    pub deleted: bool,
    /// Id of the event this record superseded via an edit, if any.
    pub replaces: Option<EventId>,
}

impl Event {
    /// Creates a new active event with a generated stable ID.
    pub fn new(
        owner_uuid: UserId,
        title: impl Into<String>,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        description: Option<String>,
    ) -> Self {
        let title: String = title.into();
        Self {
            uuid: Uuid::new_v4(),
            title: title.trim().to_string(),
            start_time,
            end_time,
            description,
            owner_uuid,
            deleted: false,
            replaces: None,
        }
    }

    /// Checks domain invariants. Called by write paths before persistence.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.end_time < self.start_time {
            return Err(ValidationError::EndBeforeStart {
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }

    /// Marks this event as tombstoned.
    pub fn soft_delete(&mut self) {
        self.deleted = true;
    }

    /// Returns whether this event is visible to queries.
    pub fn is_active(&self) -> bool {
        !self.deleted
    }
}
