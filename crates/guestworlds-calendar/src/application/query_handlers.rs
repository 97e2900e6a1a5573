//! Query handlers for the guest world calendar.
//!
//! Every handler is a pure function of the injected `Schedule` and its
//! inputs and returns a read-only view. "Now" is passed in by the caller,
//! who reads it from a `Clock`.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use guestworlds_core::error::QueryError;
use serde::Serialize;
use tracing::debug;

use crate::domain::change_event::{ChangeEvent, WorldPair};
use crate::domain::schedule::Schedule;

/// Format a date slot must arrive in.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// How far past UTC midnight a requested date is looked up. Noon UTC is
/// past the 04:00 UTC changeover, so a day resolves to the worlds that
/// start on it rather than the ones that end on it.
const DATE_LOOKUP_SHIFT_HOURS: i64 = 12;

/// Read-only view of a changeover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestWorldsView {
    /// The two worlds.
    pub worlds: WorldPair,
    /// When the worlds became (or become) active, in the cutover offset.
    pub effective_at: DateTime<FixedOffset>,
}

impl From<&ChangeEvent> for GuestWorldsView {
    fn from(event: &ChangeEvent) -> Self {
        Self {
            worlds: event.worlds.clone(),
            effective_at: event.effective_at,
        }
    }
}

/// Read-only view of the worlds active on a requested date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatedWorldsView {
    /// The date that was asked about.
    pub date: NaiveDate,
    /// The two worlds active on that date.
    pub worlds: WorldPair,
}

/// Where a named world stands relative to now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WorldAvailability {
    /// The world is in the active pair, which started at `since`.
    ActiveNow {
        /// Start of the active changeover.
        since: DateTime<FixedOffset>,
    },
    /// The world comes back at `from`.
    Upcoming {
        /// Start of the soonest changeover naming the world.
        from: DateTime<FixedOffset>,
    },
}

/// Returns the guest worlds active at `now`.
///
/// A changeover exactly at `now` is already active. Returns `None` when
/// `now` precedes every changeover.
#[must_use]
pub fn current_worlds(schedule: &Schedule, now: DateTime<Utc>) -> Option<GuestWorldsView> {
    let view = schedule.calendar().active_at(now).map(GuestWorldsView::from);
    debug!(%now, found = view.is_some(), "resolved current guest worlds");
    view
}

/// Returns the soonest changeover strictly after `now`.
///
/// Returns `None` when every changeover is at or before `now`, which
/// happens whenever the published calendar has run out.
#[must_use]
pub fn next_worlds(schedule: &Schedule, now: DateTime<Utc>) -> Option<GuestWorldsView> {
    let view = schedule
        .calendar()
        .upcoming_after(now)
        .last()
        .map(GuestWorldsView::from);
    debug!(%now, found = view.is_some(), "resolved next guest worlds");
    view
}

/// Returns the guest worlds active on the `YYYY-MM-DD` date in `date_text`.
///
/// # Errors
///
/// Returns `QueryError::Unparsed` if `date_text` is absent or malformed.
/// Returns `QueryError::NotFound` if the date precedes the calendar.
pub fn worlds_on_date(
    schedule: &Schedule,
    date_text: Option<&str>,
) -> Result<DatedWorldsView, QueryError> {
    let text = date_text.ok_or(QueryError::Unparsed(None))?;
    let date = parse_date(text).ok_or_else(|| QueryError::Unparsed(Some(text.to_owned())))?;

    let lookup_at = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
        + TimeDelta::hours(DATE_LOOKUP_SHIFT_HOURS);
    debug!(%date, %lookup_at, "looking up guest worlds for date");

    let event = schedule
        .calendar()
        .active_at(lookup_at)
        .ok_or(QueryError::NotFound(date))?;
    Ok(DatedWorldsView {
        date,
        worlds: event.worlds.clone(),
    })
}

/// Returns when `world_name` next starts a changeover after `now`.
///
/// Only changeovers strictly after `now` count; the scan walks back from
/// the end of the calendar and stops at the first changeover at or before
/// `now`, keeping the earliest match seen.
///
/// # Errors
///
/// Returns `QueryError::UnknownWorld` if the name is not in the catalog.
/// Returns `QueryError::NoUpcoming` if no later changeover names the world.
pub fn next_occurrence(
    schedule: &Schedule,
    world_name: &str,
    now: DateTime<Utc>,
) -> Result<DateTime<FixedOffset>, QueryError> {
    ensure_known(schedule, world_name)?;

    let next = schedule
        .calendar()
        .upcoming_after(now)
        .filter(|event| event.worlds.contains(world_name))
        .last()
        .map(|event| event.effective_at);
    debug!(world = world_name, %now, ?next, "resolved next occurrence");

    next.ok_or_else(|| QueryError::NoUpcoming(world_name.to_owned()))
}

/// Reports whether `world_name` is rideable now and, if not, when it
/// comes back.
///
/// # Errors
///
/// Returns `QueryError::UnknownWorld` if the name is not in the catalog.
/// Returns `QueryError::NoUpcoming` if the world is neither active nor
/// scheduled again.
pub fn world_availability(
    schedule: &Schedule,
    world_name: &str,
    now: DateTime<Utc>,
) -> Result<WorldAvailability, QueryError> {
    ensure_known(schedule, world_name)?;

    if let Some(active) = schedule.calendar().active_at(now)
        && active.worlds.contains(world_name)
    {
        return Ok(WorldAvailability::ActiveNow {
            since: active.effective_at,
        });
    }

    next_occurrence(schedule, world_name, now).map(|from| WorldAvailability::Upcoming { from })
}

/// Parses strict `YYYY-MM-DD`. chrono alone also accepts unpadded fields,
/// signs and leading whitespace, so the date must format back to `text`.
fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == text)
}

fn ensure_known(schedule: &Schedule, world_name: &str) -> Result<(), QueryError> {
    if schedule.catalog().contains(world_name) {
        Ok(())
    } else {
        Err(QueryError::UnknownWorld(world_name.to_owned()))
    }
}
