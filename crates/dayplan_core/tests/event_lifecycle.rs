use chrono::{NaiveDate, NaiveDateTime};
use dayplan_core::db::open_db_in_memory;
use dayplan_core::{
    AgendaService, EventDraft, RepoError, ScheduleService, SqliteEventRepository,
    SqliteTodoRepository, SqliteUserRepository, User, UserId, UserRepository, ValidationError,
};
use rusqlite::Connection;
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

fn seed_user(conn: &Connection, username: &str) -> UserId {
    let user = User::new(username, "not-a-real-hash", "");
    SqliteUserRepository::new(conn).create_user(&user).unwrap()
}

fn schedule(conn: &Connection) -> ScheduleService<SqliteEventRepository<'_>, SqliteTodoRepository<'_>> {
    ScheduleService::new(
        SqliteEventRepository::new(conn),
        SqliteTodoRepository::new(conn),
    )
}

fn agenda(conn: &Connection) -> AgendaService<SqliteEventRepository<'_>, SqliteTodoRepository<'_>> {
    AgendaService::new(
        SqliteEventRepository::new(conn),
        SqliteTodoRepository::new(conn),
    )
}

fn draft(title: &str, start: NaiveDateTime, end: NaiveDateTime) -> EventDraft {
    EventDraft {
        title: title.to_string(),
        start_time: start,
        end_time: end,
        description: None,
    }
}

#[test]
fn created_event_shows_up_on_its_day() {
    let conn = open_db_in_memory().unwrap();
    let alice = seed_user(&conn, "alice");

    let event = schedule(&conn)
        .create_event(
            alice,
            &draft("Standup", dt(2024, 6, 10, 9, 0), dt(2024, 6, 10, 9, 30)),
        )
        .unwrap();

    let on_day = agenda(&conn).events_on_day(alice, date(2024, 6, 10)).unwrap();
    assert_eq!(on_day.len(), 1);
    assert_eq!(on_day[0].uuid, event.uuid);
    assert_eq!(on_day[0].title, "Standup");
    assert!(on_day[0].is_active());
}

#[test]
fn blank_title_is_rejected_with_no_state_change() {
    let conn = open_db_in_memory().unwrap();
    let alice = seed_user(&conn, "alice");

    let err = schedule(&conn)
        .create_event(
            alice,
            &draft("   ", dt(2024, 6, 10, 9, 0), dt(2024, 6, 10, 9, 30)),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::EmptyTitle)
    ));

    assert!(agenda(&conn)
        .events_on_day(alice, date(2024, 6, 10))
        .unwrap()
        .is_empty());
}

#[test]
fn reversed_interval_is_rejected_with_no_state_change() {
    let conn = open_db_in_memory().unwrap();
    let alice = seed_user(&conn, "alice");

    let err = schedule(&conn)
        .create_event(
            alice,
            &draft("Backwards", dt(2024, 6, 10, 12, 0), dt(2024, 6, 10, 9, 0)),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::EndBeforeStart { .. })
    ));

    assert!(agenda(&conn)
        .events_on_day(alice, date(2024, 6, 10))
        .unwrap()
        .is_empty());
}

#[test]
fn complete_event_hides_it_and_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let alice = seed_user(&conn, "alice");
    let service = schedule(&conn);

    let event = service
        .create_event(
            alice,
            &draft("Standup", dt(2024, 6, 10, 9, 0), dt(2024, 6, 10, 9, 30)),
        )
        .unwrap();

    assert!(service.complete_event(event.uuid, alice).unwrap());
    assert!(agenda(&conn)
        .events_on_day(alice, date(2024, 6, 10))
        .unwrap()
        .is_empty());

    // Second completion is a truthful no-op.
    assert!(service.complete_event(event.uuid, alice).unwrap());
}

#[test]
fn complete_event_fails_closed_for_unknown_or_foreign_ids() {
    let conn = open_db_in_memory().unwrap();
    let alice = seed_user(&conn, "alice");
    let mallory = seed_user(&conn, "mallory");
    let service = schedule(&conn);

    let event = service
        .create_event(
            alice,
            &draft("Private", dt(2024, 6, 10, 9, 0), dt(2024, 6, 10, 9, 30)),
        )
        .unwrap();

    assert!(!service.complete_event(Uuid::new_v4(), alice).unwrap());
    assert!(!service.complete_event(event.uuid, mallory).unwrap());

    // Still visible to the owner after the failed attempts.
    assert_eq!(
        agenda(&conn)
            .events_on_day(alice, date(2024, 6, 10))
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn edit_supersedes_the_old_record() {
    let conn = open_db_in_memory().unwrap();
    let alice = seed_user(&conn, "alice");
    let service = schedule(&conn);

    let original = service
        .create_event(
            alice,
            &draft("Planning", dt(2024, 6, 10, 10, 0), dt(2024, 6, 10, 11, 0)),
        )
        .unwrap();

    let edited = service
        .edit_event(
            original.uuid,
            alice,
            &draft("Planning (moved)", dt(2024, 6, 10, 14, 0), dt(2024, 6, 10, 15, 0)),
        )
        .unwrap();

    assert_ne!(edited.uuid, original.uuid);
    assert_eq!(edited.replaces, Some(original.uuid));

    let on_day = agenda(&conn).events_on_day(alice, date(2024, 6, 10)).unwrap();
    assert_eq!(on_day.len(), 1);
    assert_eq!(on_day[0].uuid, edited.uuid);
    assert_eq!(on_day[0].title, "Planning (moved)");
}

#[test]
fn edit_of_missing_or_foreign_event_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let alice = seed_user(&conn, "alice");
    let mallory = seed_user(&conn, "mallory");
    let service = schedule(&conn);

    let event = service
        .create_event(
            alice,
            &draft("Private", dt(2024, 6, 10, 9, 0), dt(2024, 6, 10, 9, 30)),
        )
        .unwrap();
    let fields = draft("Hijack", dt(2024, 6, 10, 9, 0), dt(2024, 6, 10, 9, 30));

    let missing = service.edit_event(Uuid::new_v4(), alice, &fields).unwrap_err();
    assert!(matches!(missing, RepoError::NotFound(_)));

    let foreign = service.edit_event(event.uuid, mallory, &fields).unwrap_err();
    assert!(matches!(foreign, RepoError::NotFound(id) if id == event.uuid));

    // The owner's record is untouched.
    let on_day = agenda(&conn).events_on_day(alice, date(2024, 6, 10)).unwrap();
    assert_eq!(on_day.len(), 1);
    assert_eq!(on_day[0].title, "Private");
}

#[test]
fn invalid_edit_leaves_the_original_active() {
    let conn = open_db_in_memory().unwrap();
    let alice = seed_user(&conn, "alice");
    let service = schedule(&conn);

    let original = service
        .create_event(
            alice,
            &draft("Planning", dt(2024, 6, 10, 10, 0), dt(2024, 6, 10, 11, 0)),
        )
        .unwrap();

    let err = service
        .edit_event(
            original.uuid,
            alice,
            &draft("Planning", dt(2024, 6, 10, 11, 0), dt(2024, 6, 10, 10, 0)),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::EndBeforeStart { .. })
    ));

    let on_day = agenda(&conn).events_on_day(alice, date(2024, 6, 10)).unwrap();
    assert_eq!(on_day.len(), 1);
    assert_eq!(on_day[0].uuid, original.uuid);
}

#[test]
fn end_to_end_standup_scenario() {
    let conn = open_db_in_memory().unwrap();
    let alice = seed_user(&conn, "alice");
    let service = schedule(&conn);
    let queries = agenda(&conn);

    let event = service
        .create_event(
            alice,
            &draft("Standup", dt(2024, 6, 10, 9, 0), dt(2024, 6, 10, 9, 30)),
        )
        .unwrap();

    let on_day = queries.events_on_day(alice, date(2024, 6, 10)).unwrap();
    assert_eq!(on_day.len(), 1);
    assert_eq!(on_day[0].title, "Standup");

    assert!(service.complete_event(event.uuid, alice).unwrap());
    assert!(queries.events_on_day(alice, date(2024, 6, 10)).unwrap().is_empty());
}
