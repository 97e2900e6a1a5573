//! Domain layer: changeover events, the calendar, and the world catalog.

pub mod calendar;
pub mod catalog;
pub mod change_event;
pub mod schedule;
pub mod season;
