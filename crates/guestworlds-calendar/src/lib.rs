//! Guest Worlds: calendar store and query engine.
//!
//! Holds the chronologically ordered guest world changeovers and answers
//! the four schedule questions: what is on now, what is on next, what is on
//! a given date, and when a named world comes back.

pub mod application;
pub mod domain;
pub mod error;

pub use error::ScheduleError;
