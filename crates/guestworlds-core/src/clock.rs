//! The instant guest world queries are answered for.

use chrono::{DateTime, Utc};

/// Source of the query instant. Every "now" question (current pair, next
/// pair, when a world returns) reads it once per request, and tests pin it
/// to land either side of a changeover.
pub trait Clock: Send + Sync {
    /// The instant to compare changeovers against, in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time, used by the running skill.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_does_not_run_backwards() {
        let clock = SystemClock;

        let first = clock.now();
        let second = clock.now();

        assert!(second >= first);
    }

    #[test]
    fn test_clock_is_usable_as_shared_trait_object() {
        let clock: std::sync::Arc<dyn Clock> = std::sync::Arc::new(SystemClock);

        assert!(clock.now() <= Utc::now());
    }
}
