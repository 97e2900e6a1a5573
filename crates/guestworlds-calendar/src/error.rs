//! Schedule construction and loading errors.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while building a calendar or loading a schedule file.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The schedule file could not be read.
    #[error("failed to read schedule file: {0}")]
    Io(#[from] std::io::Error),

    /// The schedule file is not valid YAML for the expected layout.
    #[error("failed to parse schedule YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Midnight on the date cannot be represented in the cutover offset.
    #[error("date {0} cannot be placed at a changeover")]
    InvalidDate(NaiveDate),

    /// The cutover offset is outside the range a timezone offset allows.
    #[error("cutover offset of {0} hours is out of range")]
    InvalidOffset(i32),

    /// An event does not come strictly after the one before it.
    #[error("changeover {index} is not after the previous changeover")]
    OutOfOrder {
        /// Position of the offending event.
        index: usize,
    },

    /// An event is expressed in a different offset from the calendar.
    #[error("changeover {index} is not in the calendar's cutover offset")]
    OffsetMismatch {
        /// Position of the offending event.
        index: usize,
    },

    /// An event names an empty world.
    #[error("changeover {index} has an empty world name")]
    EmptyWorldName {
        /// Position of the offending event.
        index: usize,
    },
}
