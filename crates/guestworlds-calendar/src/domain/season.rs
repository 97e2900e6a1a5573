//! The built-in guest world rotation.

use chrono::NaiveDate;

use super::calendar::Calendar;
use super::catalog::WorldCatalog;
use super::change_event::{ChangeEvent, cutover_offset};
use super::schedule::Schedule;

pub const MAKURI_ISLANDS: &str = "Makuri Islands";
pub const NEW_YORK: &str = "New York";
pub const FRANCE: &str = "France";
pub const INNSBRUCK: &str = "Innsbruck";
pub const RICHMOND: &str = "Richmond";
pub const LONDON: &str = "London";
pub const PARIS: &str = "Paris";
pub const YORKSHIRE: &str = "Yorkshire";

/// Every world that can appear as a guest world.
pub const ALL_GUEST_WORLDS: [&str; 8] = [
    MAKURI_ISLANDS,
    NEW_YORK,
    FRANCE,
    INNSBRUCK,
    RICHMOND,
    LONDON,
    PARIS,
    YORKSHIRE,
];

/// December 2021 rotation as `(day, world_a, world_b)`.
const DECEMBER_2021: [(u32, &str, &str); 15] = [
    (1, MAKURI_ISLANDS, NEW_YORK),
    (3, INNSBRUCK, RICHMOND),
    (5, FRANCE, PARIS),
    (7, LONDON, YORKSHIRE),
    (10, INNSBRUCK, RICHMOND),
    (12, YORKSHIRE, INNSBRUCK),
    (14, MAKURI_ISLANDS, NEW_YORK),
    (17, FRANCE, PARIS),
    (19, INNSBRUCK, RICHMOND),
    (21, LONDON, YORKSHIRE),
    (24, MAKURI_ISLANDS, NEW_YORK),
    (25, YORKSHIRE, INNSBRUCK),
    (26, FRANCE, PARIS),
    (27, INNSBRUCK, RICHMOND),
    (28, MAKURI_ISLANDS, NEW_YORK),
];

/// The built-in schedule: the December 2021 rotation and the full catalog.
///
/// # Panics
///
/// Never in practice: the rotation is a chronological literal with real
/// dates and non-empty names.
#[must_use]
pub fn built_in_schedule() -> Schedule {
    let offset = cutover_offset();
    let events = DECEMBER_2021
        .iter()
        .map(|&(day, world_a, world_b)| {
            let date = NaiveDate::from_ymd_opt(2021, 12, day).expect("rotation day is a real date");
            ChangeEvent::at_changeover(date, offset, world_a, world_b)
                .expect("rotation day fits the cutover offset")
        })
        .collect();
    let calendar = Calendar::new(offset, events).expect("rotation is chronological");
    Schedule::new(calendar, WorldCatalog::new(ALL_GUEST_WORLDS))
}
