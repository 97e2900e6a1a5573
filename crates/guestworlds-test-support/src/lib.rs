//! Shared test clocks and time helpers for the guest world calendar.

mod clock;
mod time;

pub use clock::FixedClock;
pub use time::{date, utc};
