//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable that drives `dayplan_core` end to end
//!   against an in-memory store.
//! - Keep output deterministic for quick local sanity checks.

use chrono::NaiveDate;
use dayplan_core::db::open_db_in_memory;
use dayplan_core::holiday::japan;
use dayplan_core::{
    feed_json, holidays_in_month, AccountService, AgendaService, EventDraft, ScheduleService,
    SqliteEventRepository, SqliteTodoRepository, SqliteUserRepository,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("dayplan_core version={}", dayplan_core::core_version());

    let conn = open_db_in_memory()?;
    let accounts = AccountService::new(SqliteUserRepository::new(&conn));
    let schedule = ScheduleService::new(
        SqliteEventRepository::new(&conn),
        SqliteTodoRepository::new(&conn),
    );
    let agenda = AgendaService::new(
        SqliteEventRepository::new(&conn),
        SqliteTodoRepository::new(&conn),
    );

    let user = accounts.register("demo", "demo-password", "engineering")?;
    println!("registered user={}", user.username);

    let day = NaiveDate::from_ymd_opt(2025, 5, 5).ok_or("invalid demo date")?;
    let start = day.and_hms_opt(9, 0, 0).ok_or("invalid demo time")?;
    let end = day.and_hms_opt(9, 30, 0).ok_or("invalid demo time")?;
    schedule.create_event(
        user.uuid,
        &EventDraft {
            title: "Standup".to_string(),
            start_time: start,
            end_time: end,
            description: None,
        },
    )?;
    schedule.create_todo(user.uuid, "Water plants", day)?;

    let events = agenda.events_on_day(user.uuid, day)?;
    println!("events_on_day feed={}", feed_json(&events)?);

    let todos = agenda.active_todos_on_day(user.uuid, day)?;
    println!("active_todos={}", todos.len());

    let holidays = holidays_in_month(&japan::national_holidays(), day);
    println!(
        "holidays_in_month={}",
        holidays
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(",")
    );

    Ok(())
}
