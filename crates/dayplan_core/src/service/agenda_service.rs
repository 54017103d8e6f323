//! Day and period query service.
//!
//! # Responsibility
//! - Answer "what is on this day / in this range" for one user.
//! - Derive the half-open time windows handed to the repository layer.
//!
//! # Invariants
//! - Event queries use an overlap test, not a start-date equality test; a
//!   multi-day event appears on every day it spans.
//! - Todo queries use exact-date equality; todos have no end date.
//! - Tombstoned events and completed todos never appear in results.

use crate::holiday::month_bounds;
use crate::model::event::Event;
use crate::model::todo::Todo;
use crate::model::user::UserId;
use crate::repo::event_repo::EventRepository;
use crate::repo::todo_repo::TodoRepository;
use crate::repo::RepoResult;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Use-case service for per-day and per-period reads.
pub struct AgendaService<E: EventRepository, T: TodoRepository> {
    events: E,
    todos: T,
}

impl<E: EventRepository, T: TodoRepository> AgendaService<E, T> {
    /// Creates a service using the provided repository implementations.
    pub fn new(events: E, todos: T) -> Self {
        Self { events, todos }
    }

    /// Lists active events of `owner` overlapping the 24-hour window of
    /// `day`, ascending by start time.
    pub fn events_on_day(&self, owner: UserId, day: NaiveDate) -> RepoResult<Vec<Event>> {
        self.events
            .events_overlapping(owner, day_start(day), next_day_start(day))
    }

    /// Lists active events of `owner` overlapping the window spanning
    /// `start_date..=end_date`, ascending by start time.
    ///
    /// A reversed range yields an empty window and therefore no events.
    pub fn events_in_range(
        &self,
        owner: UserId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> RepoResult<Vec<Event>> {
        self.events
            .events_overlapping(owner, day_start(start_date), next_day_start(end_date))
    }

    /// Lists active events of `owner` overlapping the calendar month
    /// containing `any_day`. Feeds the month calendar view.
    pub fn events_in_month(&self, owner: UserId, any_day: NaiveDate) -> RepoResult<Vec<Event>> {
        let (first, last) = month_bounds(any_day);
        self.events_in_range(owner, first, last)
    }

    /// Lists open todos of `owner` for exactly `day`.
    pub fn active_todos_on_day(&self, owner: UserId, day: NaiveDate) -> RepoResult<Vec<Todo>> {
        self.todos.active_on_day(owner, day)
    }
}

fn day_start(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

fn next_day_start(day: NaiveDate) -> NaiveDateTime {
    day.succ_opt()
        .map_or(NaiveDateTime::MAX, |next| next.and_time(NaiveTime::MIN))
}
