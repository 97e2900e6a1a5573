//! Query outcome kinds.

use chrono::NaiveDate;
use thiserror::Error;

/// Ways a calendar query can come back without a result.
///
/// None of these are faults: each is an ordinary answer the voice layer
/// turns into speech.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The date text was missing or not in `YYYY-MM-DD` form.
    #[error("unparsed date: {0:?}")]
    Unparsed(Option<String>),

    /// The world name is not in the catalog.
    #[error("unrecognized guest world: {0}")]
    UnknownWorld(String),

    /// The date precedes every changeover in the calendar.
    #[error("no guest worlds found for {0}")]
    NotFound(NaiveDate),

    /// The world has no changeover after the current time.
    #[error("no upcoming dates for guest world {0}")]
    NoUpcoming(String),

    /// The current time precedes every changeover in the calendar.
    #[error("no guest worlds are active")]
    NoActive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_includes_date() {
        let date = NaiveDate::from_ymd_opt(2021, 11, 29).unwrap();

        let message = QueryError::NotFound(date).to_string();

        assert_eq!(message, "no guest worlds found for 2021-11-29");
    }

    #[test]
    fn test_unparsed_message_shows_missing_input() {
        assert_eq!(QueryError::Unparsed(None).to_string(), "unparsed date: None");
        assert_eq!(
            QueryError::Unparsed(Some("2021-12-XX".to_owned())).to_string(),
            "unparsed date: Some(\"2021-12-XX\")"
        );
    }
}
