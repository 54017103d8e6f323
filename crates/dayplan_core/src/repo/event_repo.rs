//! Event repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide owner-scoped CRUD and window queries over `events`.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `Event::validate()` before SQL mutations.
//! - Tombstoned rows (`deleted = 1`) never leave a query unless the caller
//!   explicitly asks for them.
//! - Soft-delete matches rows by id+owner without filtering on the current
//!   tombstone state, so a repeated delete stays a truthful no-op.

use crate::model::event::{Event, EventId};
use crate::model::user::UserId;
use crate::repo::{bool_to_int, parse_stored_flag, parse_stored_uuid, RepoResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rusqlite::{params, Connection, Row};

const EVENT_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    start_time,
    end_time,
    description,
    owner_uuid,
    deleted,
    replaces_uuid
FROM events";

/// Repository interface for calendar events.
pub trait EventRepository {
    /// Persists one new event and returns its stable id.
    fn create_event(&self, event: &Event) -> RepoResult<EventId>;
    /// Gets one event by id, scoped to `owner`.
    fn get_event(
        &self,
        id: EventId,
        owner: UserId,
        include_deleted: bool,
    ) -> RepoResult<Option<Event>>;
    /// Tombstones one event by id+owner. Returns whether a row matched.
    fn soft_delete_event(&self, id: EventId, owner: UserId) -> RepoResult<bool>;
    /// Tombstones every active event of `owner` with exactly `title` whose
    /// start instant falls on `day`. Returns the number of rows touched.
    fn soft_delete_matching(&self, owner: UserId, title: &str, day: NaiveDate)
        -> RepoResult<usize>;
    /// Lists active events of `owner` overlapping `[from, until)`, ordered
    /// ascending by start time.
    fn events_overlapping(
        &self,
        owner: UserId,
        from: NaiveDateTime,
        until: NaiveDateTime,
    ) -> RepoResult<Vec<Event>>;
}

/// SQLite-backed event repository.
pub struct SqliteEventRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEventRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EventRepository for SqliteEventRepository<'_> {
    fn create_event(&self, event: &Event) -> RepoResult<EventId> {
        event.validate()?;

        self.conn.execute(
            "INSERT INTO events (
                uuid,
                title,
                start_time,
                end_time,
                description,
                owner_uuid,
                deleted,
                replaces_uuid
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                event.uuid.to_string(),
                event.title.as_str(),
                event.start_time,
                event.end_time,
                event.description.as_deref(),
                event.owner_uuid.to_string(),
                bool_to_int(event.deleted),
                event.replaces.map(|id| id.to_string()),
            ],
        )?;

        Ok(event.uuid)
    }

    fn get_event(
        &self,
        id: EventId,
        owner: UserId,
        include_deleted: bool,
    ) -> RepoResult<Option<Event>> {
        let mut stmt = self.conn.prepare(&format!(
            "{EVENT_SELECT_SQL}
             WHERE uuid = ?1
               AND owner_uuid = ?2
               AND (?3 = 1 OR deleted = 0);"
        ))?;

        let mut rows = stmt.query(params![
            id.to_string(),
            owner.to_string(),
            bool_to_int(include_deleted)
        ])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_event_row(row)?));
        }

        Ok(None)
    }

    fn soft_delete_event(&self, id: EventId, owner: UserId) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE events
             SET
                deleted = 1,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?1
               AND owner_uuid = ?2;",
            params![id.to_string(), owner.to_string()],
        )?;

        Ok(changed > 0)
    }

    fn soft_delete_matching(
        &self,
        owner: UserId,
        title: &str,
        day: NaiveDate,
    ) -> RepoResult<usize> {
        let day_start = day.and_time(NaiveTime::MIN);
        let next_day_start = day
            .succ_opt()
            .map_or(NaiveDateTime::MAX, |next| next.and_time(NaiveTime::MIN));

        let changed = self.conn.execute(
            "UPDATE events
             SET
                deleted = 1,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE owner_uuid = ?1
               AND deleted = 0
               AND title = ?2
               AND start_time >= ?3
               AND start_time < ?4;",
            params![owner.to_string(), title, day_start, next_day_start],
        )?;

        Ok(changed)
    }

    fn events_overlapping(
        &self,
        owner: UserId,
        from: NaiveDateTime,
        until: NaiveDateTime,
    ) -> RepoResult<Vec<Event>> {
        let mut stmt = self.conn.prepare(&format!(
            "{EVENT_SELECT_SQL}
             WHERE owner_uuid = ?1
               AND deleted = 0
               AND start_time < ?2
               AND end_time >= ?3
             ORDER BY start_time ASC, uuid ASC;"
        ))?;

        let mut rows = stmt.query(params![owner.to_string(), until, from])?;
        let mut events = Vec::new();

        while let Some(row) = rows.next()? {
            events.push(parse_event_row(row)?);
        }

        Ok(events)
    }
}

fn parse_event_row(row: &Row<'_>) -> RepoResult<Event> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = parse_stored_uuid(&uuid_text, "events.uuid")?;

    let owner_text: String = row.get("owner_uuid")?;
    let owner_uuid = parse_stored_uuid(&owner_text, "events.owner_uuid")?;

    let replaces = match row.get::<_, Option<String>>("replaces_uuid")? {
        Some(value) => Some(parse_stored_uuid(&value, "events.replaces_uuid")?),
        None => None,
    };

    let deleted = parse_stored_flag(row.get("deleted")?, "events.deleted")?;

    let event = Event {
        uuid,
        title: row.get("title")?,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
        description: row.get("description")?,
        owner_uuid,
        deleted,
        replaces,
    };
    event.validate()?;
    Ok(event)
}
