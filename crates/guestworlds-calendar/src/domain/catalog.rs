//! The set of recognised guest world names.

use std::collections::BTreeSet;

use super::calendar::Calendar;

/// Every guest world name a query may ask about. Matching is exact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldCatalog {
    names: BTreeSet<String>,
}

impl WorldCatalog {
    /// Builds a catalog from world names. Duplicates collapse.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a catalog of every world the calendar mentions.
    #[must_use]
    pub fn from_calendar(calendar: &Calendar) -> Self {
        Self::new(
            calendar
                .events()
                .iter()
                .flat_map(|event| event.worlds.iter()),
        )
    }

    /// Whether `name` is a recognised guest world.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Recognised names in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of recognised worlds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no world is recognised.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use guestworlds_test_support::date;

    use super::*;
    use crate::domain::change_event::{ChangeEvent, cutover_offset};

    #[test]
    fn test_from_calendar_collects_every_world_once() {
        // Arrange
        let events = vec![
            ChangeEvent::at_changeover(date(2021, 12, 1), cutover_offset(), "London", "Yorkshire")
                .unwrap(),
            ChangeEvent::at_changeover(date(2021, 12, 3), cutover_offset(), "Yorkshire", "Paris")
                .unwrap(),
        ];
        let calendar = Calendar::new(cutover_offset(), events).unwrap();

        // Act
        let catalog = WorldCatalog::from_calendar(&calendar);

        // Assert
        assert_eq!(
            catalog.names().collect::<Vec<_>>(),
            vec!["London", "Paris", "Yorkshire"]
        );
    }

    #[test]
    fn test_contains_does_no_fuzzy_matching() {
        let catalog = WorldCatalog::new(["Richmond", "Innsbruck"]);

        assert!(catalog.contains("Richmond"));
        assert!(!catalog.contains("richmond"));
        assert!(!catalog.contains("Richmond "));
        assert!(!catalog.contains("foobar"));
    }
}
