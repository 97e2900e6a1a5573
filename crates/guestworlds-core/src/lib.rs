//! Guest Worlds Core: shared abstractions.
//!
//! This crate defines the clock capability and the query error taxonomy
//! that the calendar engine and the voice skill both depend on. It contains
//! no infrastructure code.

pub mod clock;
pub mod error;
