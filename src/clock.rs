//! Calendar year source for age computation.

use chrono::Datelike;
use tracing::instrument;

/// Supplies the current calendar year.
pub trait Clock {
    /// Returns the current year.
    fn current_year(&self) -> i32;
}

/// Reads the year from the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[instrument]
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// Always reports the same year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct FixedClock {
    year: i32,
}

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.year
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn current_year(&self) -> i32 {
        (**self).current_year()
    }
}
