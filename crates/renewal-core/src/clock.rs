//! # Clock
//!
//! The current calendar year is an input to validation, not something the
//! core looks up. Callers pass a [`Clock`]; the CLI backs it with the system
//! clock, tests back it with [`FixedClock`].

/// Source of the current calendar year.
pub trait Clock {
    /// The calendar year at the moment of the call.
    fn current_year(&self) -> i64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn current_year(&self) -> i64 {
        (**self).current_year()
    }
}

/// A clock pinned to one year.
///
/// ## Example
/// ```rust
/// use renewal_core::{Clock, FixedClock};
///
/// assert_eq!(FixedClock::new(2026).current_year(), 2026);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(i64);

impl FixedClock {
    pub const fn new(year: i64) -> Self {
        FixedClock(year)
    }
}

impl Clock for FixedClock {
    fn current_year(&self) -> i64 {
        self.0
    }
}
