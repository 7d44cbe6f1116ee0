// Wall-clock abstraction so day counts can be computed against a frozen
// "now" in tests.

use chrono::{DateTime, Local};

/// Source of the current wall-clock time.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Production clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock frozen at a fixed instant. Exported for integration and property
/// tests that need deterministic renders.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};

    use super::{Clock, FixedClock, SystemClock};

    #[test]
    fn fixed_clock_returns_its_instant() {
        let t = Local::now() + Duration::days(3);
        let clock = FixedClock(t);
        assert_eq!(clock.now(), t);
        assert_eq!(clock.now(), t);
    }

    #[test]
    fn system_clock_tracks_local_time() {
        let before = Local::now();
        let read = SystemClock.now();
        let after = Local::now();
        assert!(before <= read && read <= after);
    }
}
