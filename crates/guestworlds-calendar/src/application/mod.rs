//! Application layer: queries over the schedule and schedule loading.

pub mod query_handlers;
pub mod schedule_loader;
