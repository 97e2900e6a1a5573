//! The ordered changeover timeline.

use chrono::{DateTime, FixedOffset, Utc};

use super::change_event::ChangeEvent;
use crate::error::ScheduleError;

/// Chronologically ordered guest world changeovers in one cutover offset.
///
/// Immutable once built. `Calendar::new` guarantees strictly increasing
/// `effective_at` and non-empty world names, which the scans below rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    offset: FixedOffset,
    events: Vec<ChangeEvent>,
}

impl Calendar {
    /// Builds a calendar from events listed in changeover order.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::EmptyWorldName` if an event names an empty
    /// world, `ScheduleError::OffsetMismatch` if an event is not expressed
    /// in `offset`, or `ScheduleError::OutOfOrder` if an event does not come
    /// strictly after its predecessor.
    pub fn new(offset: FixedOffset, events: Vec<ChangeEvent>) -> Result<Self, ScheduleError> {
        for (index, event) in events.iter().enumerate() {
            if event.worlds.iter().any(str::is_empty) {
                return Err(ScheduleError::EmptyWorldName { index });
            }
            if *event.effective_at.offset() != offset {
                return Err(ScheduleError::OffsetMismatch { index });
            }
        }
        if let Some(index) = events
            .windows(2)
            .position(|pair| pair[1].effective_at <= pair[0].effective_at)
        {
            return Err(ScheduleError::OutOfOrder { index: index + 1 });
        }
        Ok(Self { offset, events })
    }

    /// The offset changeovers happen in.
    #[must_use]
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// All changeovers, earliest first.
    #[must_use]
    pub fn events(&self) -> &[ChangeEvent] {
        &self.events
    }

    /// Returns `true` if the calendar has no changeovers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of changeovers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// The changeover in force at `instant`: the latest one whose
    /// `effective_at` is not after it. A changeover exactly at `instant`
    /// is already in force.
    #[must_use]
    pub fn active_at(&self, instant: DateTime<Utc>) -> Option<&ChangeEvent> {
        self.events
            .iter()
            .take_while(|event| event.effective_at <= instant)
            .last()
    }

    /// Changeovers strictly after `instant`, walking from the last one back
    /// toward the head. The walk stops at the first changeover at or before
    /// `instant`, so the final item yielded is the soonest upcoming one.
    pub fn upcoming_after(
        &self,
        instant: DateTime<Utc>,
    ) -> impl Iterator<Item = &ChangeEvent> + '_ {
        self.events
            .iter()
            .rev()
            .take_while(move |event| event.effective_at > instant)
    }
}
