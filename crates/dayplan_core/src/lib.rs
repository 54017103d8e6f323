//! Core domain logic for Dayplan, a single-tenant scheduling system.
//! This crate is the single source of truth for business invariants:
//! the event/todo lifecycle, owner-scoped day and period queries, and the
//! month holiday calculator.

pub mod db;
pub mod feed;
pub mod holiday;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use feed::{feed_items, feed_json, EventFeedItem};
pub use holiday::{holidays_in_month, month_bounds, HolidayCalendar, HolidayTable};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{Event, EventId};
pub use model::todo::{Todo, TodoId};
pub use model::user::{User, UserId};
pub use model::ValidationError;
pub use repo::event_repo::{EventRepository, SqliteEventRepository};
pub use repo::todo_repo::{SqliteTodoRepository, TodoRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{RepoError, RepoResult};
pub use service::account_service::{AccountError, AccountService};
pub use service::agenda_service::AgendaService;
pub use service::schedule_service::{EventDraft, ScheduleService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
