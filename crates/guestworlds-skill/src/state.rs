//! Shared application state.

use std::sync::Arc;

use guestworlds_calendar::domain::schedule::Schedule;
use guestworlds_core::clock::Clock;

/// Application state shared across all request handlers.
///
/// Both fields are read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Source of "now" for every query.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// The calendar and catalog queries run against.
    pub schedule: Arc<Schedule>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock + Send + Sync>, schedule: Arc<Schedule>) -> Self {
        Self { clock, schedule }
    }
}
