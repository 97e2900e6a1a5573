//! Loads a replacement schedule from a YAML file.
//!
//! Layout:
//!
//! ```yaml
//! cutover_utc_offset_hours: -4
//! changes:
//!   - date: 2021-12-01
//!     worlds: [Makuri Islands, New York]
//! catalog: [Makuri Islands, New York]
//! ```
//!
//! `cutover_utc_offset_hours` defaults to −4 and `catalog` defaults to every
//! world named under `changes`.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::domain::calendar::Calendar;
use crate::domain::catalog::WorldCatalog;
use crate::domain::change_event::{CUTOVER_UTC_OFFSET_HOURS, ChangeEvent, offset_from_hours};
use crate::domain::schedule::Schedule;
use crate::error::ScheduleError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScheduleFile {
    #[serde(default = "default_offset_hours")]
    cutover_utc_offset_hours: i32,
    changes: Vec<ChangeEntry>,
    #[serde(default)]
    catalog: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChangeEntry {
    date: NaiveDate,
    worlds: [String; 2],
}

fn default_offset_hours() -> i32 {
    CUTOVER_UTC_OFFSET_HOURS
}

/// Parses a schedule from YAML text.
///
/// # Errors
///
/// Returns `ScheduleError::Yaml` for malformed YAML, and the calendar
/// validation errors for bad offsets, dates, ordering, or world names.
pub fn parse_schedule(yaml: &str) -> Result<Schedule, ScheduleError> {
    let file: ScheduleFile = serde_yaml::from_str(yaml)?;
    let offset = offset_from_hours(file.cutover_utc_offset_hours)
        .ok_or(ScheduleError::InvalidOffset(file.cutover_utc_offset_hours))?;

    let events = file
        .changes
        .into_iter()
        .map(|entry| {
            let [world_a, world_b] = entry.worlds;
            ChangeEvent::at_changeover(entry.date, offset, world_a, world_b)
        })
        .collect::<Result<Vec<_>, _>>()?;
    let calendar = Calendar::new(offset, events)?;

    Ok(match file.catalog {
        Some(names) => Schedule::new(calendar, WorldCatalog::new(names)),
        None => Schedule::from_calendar(calendar),
    })
}

/// Reads and parses a schedule file.
///
/// # Errors
///
/// Returns `ScheduleError::Io` if the file cannot be read, otherwise the
/// errors of [`parse_schedule`].
pub fn load_schedule(path: &Path) -> Result<Schedule, ScheduleError> {
    let yaml = std::fs::read_to_string(path)?;
    let schedule = parse_schedule(&yaml)?;
    info!(
        path = %path.display(),
        changeovers = schedule.calendar().len(),
        worlds = schedule.catalog().len(),
        "loaded guest world schedule"
    );
    Ok(schedule)
}
