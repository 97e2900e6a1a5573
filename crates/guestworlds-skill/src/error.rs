//! Guest Worlds skill: startup error types.

use guestworlds_calendar::ScheduleError;
use thiserror::Error;

/// Startup errors for the skill server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The schedule file could not be loaded.
    #[error("schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}
