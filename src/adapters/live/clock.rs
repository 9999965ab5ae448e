//! System clock adapter.

use chrono::{DateTime, Utc};

use crate::ports::Clock;

/// Clock backed by the operating system, used for the shell banner.
#[derive(Debug, Default, Clone, Copy)]
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_the_system_clock() {
        let clock = LiveClock;
        let lower = Utc::now();
        let sampled = clock.now();

        assert!(sampled >= lower);
        assert!(Utc::now() >= sampled);
    }
}
