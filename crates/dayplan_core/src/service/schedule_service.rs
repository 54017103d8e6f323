//! Event/todo lifecycle engine.
//!
//! # Responsibility
//! - Own the create/complete/edit transitions for events and todos.
//! - Perform the completion coupling action between todos and same-day,
//!   same-title events.
//!
//! # Invariants
//! - Events move `active -> deleted` only; the tombstone is terminal.
//! - Todos move `active -> completed` only; completion is terminal.
//! - Lookups by id fail closed: a missing record and a record owned by
//!   someone else are indistinguishable to the caller.
//! - An edit never mutates the stored row; it tombstones the old record
//!   and inserts a replacement that references it.

use crate::model::event::{Event, EventId};
use crate::model::todo::{Todo, TodoId};
use crate::model::user::UserId;
use crate::repo::event_repo::EventRepository;
use crate::repo::todo_repo::TodoRepository;
use crate::repo::{RepoError, RepoResult};
use chrono::{NaiveDate, NaiveDateTime};
use log::info;

/// Request model for creating or editing one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    /// Event title. Leading/trailing whitespace is ignored.
    pub title: String,
    /// Naive local start instant.
    pub start_time: NaiveDateTime,
    /// Naive local end instant. Must not be earlier than `start_time`.
    pub end_time: NaiveDateTime,
    /// Optional free-text description.
    pub description: Option<String>,
}

/// Use-case service for event/todo lifecycle transitions.
pub struct ScheduleService<E: EventRepository, T: TodoRepository> {
    events: E,
    todos: T,
}

impl<E: EventRepository, T: TodoRepository> ScheduleService<E, T> {
    /// Creates a service using the provided repository implementations.
    pub fn new(events: E, todos: T) -> Self {
        Self { events, todos }
    }

    /// Creates one active event owned by `owner`.
    ///
    /// # Contract
    /// - Rejects a blank title or a reversed interval with `Validation`,
    ///   leaving the store unchanged.
    /// - Returns the persisted record.
    pub fn create_event(&self, owner: UserId, draft: &EventDraft) -> RepoResult<Event> {
        let event = Event::new(
            owner,
            draft.title.clone(),
            draft.start_time,
            draft.end_time,
            draft.description.clone(),
        );
        self.events.create_event(&event)?;
        Ok(event)
    }

    /// Creates one open todo owned by `owner` on `date`.
    ///
    /// # Contract
    /// - Rejects a blank title with `Validation`, leaving the store
    ///   unchanged.
    /// - Returns the persisted record.
    pub fn create_todo(
        &self,
        owner: UserId,
        title: impl Into<String>,
        date: NaiveDate,
    ) -> RepoResult<Todo> {
        let todo = Todo::new(owner, title, date);
        self.todos.create_todo(&todo)?;
        Ok(todo)
    }

    /// Tombstones one event. Completing and removing an event are the same
    /// transition in this system.
    ///
    /// # Contract
    /// - `Ok(false)` when no id+owner row matches; a missing event and a
    ///   foreign-owned event are indistinguishable.
    /// - Idempotent: completing an already-tombstoned event reports
    ///   `Ok(true)` again.
    pub fn complete_event(&self, id: EventId, owner: UserId) -> RepoResult<bool> {
        self.events.soft_delete_event(id, owner)
    }

    /// Completes one todo and performs the coupling action: every active
    /// event of the same owner whose title equals the todo's title and
    /// whose start instant falls on the todo's date is tombstoned with it.
    ///
    /// # Contract
    /// - `Ok(false)` when no id+owner row matches.
    /// - Completing an already-completed todo is a no-op reporting
    ///   `Ok(true)`; the coupling re-run finds nothing active to touch.
    pub fn complete_todo(&self, id: TodoId, owner: UserId) -> RepoResult<bool> {
        let Some(todo) = self.todos.get_todo(id, owner)? else {
            return Ok(false);
        };

        self.todos.complete_todo(id, owner)?;
        let coupled = self
            .events
            .soft_delete_matching(owner, &todo.title, todo.date)?;
        info!(
            "event=todo_complete module=schedule status=ok todo={} coupled_events={coupled}",
            todo.uuid
        );

        Ok(true)
    }

    /// Replaces one event with an edited copy.
    ///
    /// # Contract
    /// - `NotFound` when the event does not exist, is already tombstoned,
    ///   or belongs to someone else.
    /// - The draft is validated before any write; a rejected edit leaves
    ///   the store unchanged.
    /// - On success the old record is tombstoned and the returned record
    ///   carries a fresh id plus `replaces = Some(old id)`. Ids are never
    ///   reused.
    pub fn edit_event(&self, id: EventId, owner: UserId, draft: &EventDraft) -> RepoResult<Event> {
        let old = self
            .events
            .get_event(id, owner, false)?
            .ok_or(RepoError::NotFound(id))?;

        let mut replacement = Event::new(
            owner,
            draft.title.clone(),
            draft.start_time,
            draft.end_time,
            draft.description.clone(),
        );
        replacement.replaces = Some(old.uuid);
        replacement.validate()?;

        self.events.soft_delete_event(old.uuid, owner)?;
        self.events.create_event(&replacement)?;
        Ok(replacement)
    }
}
