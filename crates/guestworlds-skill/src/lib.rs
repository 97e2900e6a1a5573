//! Guest Worlds voice skill.
//!
//! An HTTP endpoint that takes voice assistant intent requests, answers
//! them from the guest world calendar, and replies with SSML speech.

pub mod config;
pub mod envelope;
pub mod error;
pub mod intents;
pub mod routes;
pub mod ssml;
pub mod state;
