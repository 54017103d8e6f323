//! Bundled Japanese national holiday table.
//!
//! Covers 2024 through 2026, including substitute holidays. Dates follow
//! the Cabinet Office gazette; update the table when new years are
//! published.

use super::HolidayTable;
use chrono::NaiveDate;

const NATIONAL_HOLIDAYS: &[(i32, u32, u32, &str)] = &[
    (2024, 1, 1, "New Year's Day"),
    (2024, 1, 8, "Coming of Age Day"),
    (2024, 2, 11, "National Foundation Day"),
    (2024, 2, 12, "Substitute Holiday"),
    (2024, 2, 23, "Emperor's Birthday"),
    (2024, 3, 20, "Vernal Equinox Day"),
    (2024, 4, 29, "Showa Day"),
    (2024, 5, 3, "Constitution Memorial Day"),
    (2024, 5, 4, "Greenery Day"),
    (2024, 5, 5, "Children's Day"),
    (2024, 5, 6, "Substitute Holiday"),
    (2024, 7, 15, "Marine Day"),
    (2024, 8, 11, "Mountain Day"),
    (2024, 8, 12, "Substitute Holiday"),
    (2024, 9, 16, "Respect for the Aged Day"),
    (2024, 9, 22, "Autumnal Equinox Day"),
    (2024, 9, 23, "Substitute Holiday"),
    (2024, 10, 14, "Sports Day"),
    (2024, 11, 3, "Culture Day"),
    (2024, 11, 4, "Substitute Holiday"),
    (2024, 11, 23, "Labor Thanksgiving Day"),
    (2025, 1, 1, "New Year's Day"),
    (2025, 1, 13, "Coming of Age Day"),
    (2025, 2, 11, "National Foundation Day"),
    (2025, 2, 23, "Emperor's Birthday"),
    (2025, 2, 24, "Substitute Holiday"),
    (2025, 3, 20, "Vernal Equinox Day"),
    (2025, 4, 29, "Showa Day"),
    (2025, 5, 3, "Constitution Memorial Day"),
    (2025, 5, 4, "Greenery Day"),
    (2025, 5, 5, "Children's Day"),
    (2025, 5, 6, "Substitute Holiday"),
    (2025, 7, 21, "Marine Day"),
    (2025, 8, 11, "Mountain Day"),
    (2025, 9, 15, "Respect for the Aged Day"),
    (2025, 9, 23, "Autumnal Equinox Day"),
    (2025, 10, 13, "Sports Day"),
    (2025, 11, 3, "Culture Day"),
    (2025, 11, 23, "Labor Thanksgiving Day"),
    (2025, 11, 24, "Substitute Holiday"),
    (2026, 1, 1, "New Year's Day"),
    (2026, 1, 12, "Coming of Age Day"),
    (2026, 2, 11, "National Foundation Day"),
    (2026, 2, 23, "Emperor's Birthday"),
    (2026, 3, 20, "Vernal Equinox Day"),
    (2026, 4, 29, "Showa Day"),
    (2026, 5, 3, "Constitution Memorial Day"),
    (2026, 5, 4, "Greenery Day"),
    (2026, 5, 5, "Children's Day"),
    (2026, 5, 6, "Substitute Holiday"),
    (2026, 7, 20, "Marine Day"),
    (2026, 8, 11, "Mountain Day"),
    (2026, 9, 21, "Respect for the Aged Day"),
    (2026, 9, 22, "Citizens' Holiday"),
    (2026, 9, 23, "Autumnal Equinox Day"),
    (2026, 10, 12, "Sports Day"),
    (2026, 11, 3, "Culture Day"),
    (2026, 11, 23, "Labor Thanksgiving Day"),
];

/// Builds the bundled Japanese national holiday table.
pub fn national_holidays() -> HolidayTable {
    HolidayTable::from_entries(NATIONAL_HOLIDAYS.iter().filter_map(
        |&(year, month, day, name)| {
            NaiveDate::from_ymd_opt(year, month, day).map(|date| (date, name.to_string()))
        },
    ))
}
