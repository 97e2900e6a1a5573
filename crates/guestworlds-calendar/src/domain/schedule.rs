//! The injected configuration every query runs against.

use super::calendar::Calendar;
use super::catalog::WorldCatalog;

/// A calendar together with the catalog of names queries may ask about.
///
/// Built once at startup and shared read-only; tests build their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    calendar: Calendar,
    catalog: WorldCatalog,
}

impl Schedule {
    /// Pairs a calendar with an explicit catalog.
    #[must_use]
    pub fn new(calendar: Calendar, catalog: WorldCatalog) -> Self {
        Self { calendar, catalog }
    }

    /// Uses every world the calendar mentions as the catalog.
    #[must_use]
    pub fn from_calendar(calendar: Calendar) -> Self {
        let catalog = WorldCatalog::from_calendar(&calendar);
        Self { calendar, catalog }
    }

    /// The changeover timeline.
    #[must_use]
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// The recognised world names.
    #[must_use]
    pub fn catalog(&self) -> &WorldCatalog {
        &self.catalog
    }
}
