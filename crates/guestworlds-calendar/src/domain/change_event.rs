//! Guest world changeover events.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use serde::Serialize;

use crate::error::ScheduleError;

/// Guest worlds change over at local midnight in UTC−4.
pub const CUTOVER_UTC_OFFSET_HOURS: i32 = -4;

/// Returns the fixed offset the changeovers happen in.
///
/// # Panics
///
/// Never in practice: `CUTOVER_UTC_OFFSET_HOURS` is within a day.
#[must_use]
pub fn cutover_offset() -> FixedOffset {
    offset_from_hours(CUTOVER_UTC_OFFSET_HOURS).expect("cutover offset is within one day")
}

/// Builds a fixed offset from whole hours east of UTC.
///
/// Returns `None` when the offset is a day or more away from UTC.
#[must_use]
pub fn offset_from_hours(hours: i32) -> Option<FixedOffset> {
    hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
}

/// The two guest worlds that are rideable together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorldPair {
    /// First world of the pair.
    pub world_a: String,
    /// Second world of the pair.
    pub world_b: String,
}

impl WorldPair {
    /// Creates a pair from two world names.
    #[must_use]
    pub fn new(world_a: impl Into<String>, world_b: impl Into<String>) -> Self {
        Self {
            world_a: world_a.into(),
            world_b: world_b.into(),
        }
    }

    /// Whether either world of the pair is exactly `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.world_a == name || self.world_b == name
    }

    /// Iterates both world names, `world_a` first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [self.world_a.as_str(), self.world_b.as_str()].into_iter()
    }
}

/// A changeover: from `effective_at` on, `worlds` are the guest worlds until
/// the next changeover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Midnight of the changeover day in the cutover offset.
    pub effective_at: DateTime<FixedOffset>,
    /// Worlds active from `effective_at`.
    pub worlds: WorldPair,
}

impl ChangeEvent {
    /// Places a changeover at midnight of `date` in `offset`.
    ///
    /// A "December 3" changeover in UTC−4 therefore happens at 04:00 UTC on
    /// December 3.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidDate` if midnight of `date` cannot be
    /// represented in `offset`.
    pub fn at_changeover(
        date: NaiveDate,
        offset: FixedOffset,
        world_a: impl Into<String>,
        world_b: impl Into<String>,
    ) -> Result<Self, ScheduleError> {
        let effective_at = offset
            .from_local_datetime(&date.and_time(NaiveTime::MIN))
            .single()
            .ok_or(ScheduleError::InvalidDate(date))?;
        Ok(Self {
            effective_at,
            worlds: WorldPair::new(world_a, world_b),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use guestworlds_test_support::date;

    use super::*;

    #[test]
    fn test_changeover_happens_at_four_utc() {
        let event =
            ChangeEvent::at_changeover(date(2021, 12, 3), cutover_offset(), "Innsbruck", "Richmond")
                .unwrap();

        assert_eq!(
            event.effective_at,
            Utc.with_ymd_and_hms(2021, 12, 3, 4, 0, 0).unwrap()
        );
        assert_eq!(event.effective_at.offset().local_minus_utc(), -4 * 3600);
    }

    #[test]
    fn test_world_pair_contains_is_exact() {
        let pair = WorldPair::new("Makuri Islands", "New York");

        assert!(pair.contains("Makuri Islands"));
        assert!(pair.contains("New York"));
        assert!(!pair.contains("new york"));
        assert!(!pair.contains("Makuri"));
    }

    #[test]
    fn test_offset_from_hours_rejects_a_full_day() {
        assert!(offset_from_hours(-4).is_some());
        assert!(offset_from_hours(24).is_none());
        assert!(offset_from_hours(-30).is_none());
    }
}
