//! System clock for the core's [`Clock`] seam.

use chrono::{Datelike, Local};
use renewal_core::{Clock, FixedClock};

/// Where the current year comes from for this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppClock {
    /// Local calendar year at the moment of the call.
    System,
    /// Pinned by configuration or `--current-year`.
    Fixed(FixedClock),
}

impl AppClock {
    pub const fn fixed(year: i64) -> Self {
        AppClock::Fixed(FixedClock::new(year))
    }
}

impl Clock for AppClock {
    fn current_year(&self) -> i64 {
        match self {
            AppClock::System => i64::from(Local::now().year()),
            AppClock::Fixed(clock) => clock.current_year(),
        }
    }
}
