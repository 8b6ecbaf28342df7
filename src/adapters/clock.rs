use crate::domain::ports::{SharedClock, TimeProvider};
use chrono::{Datelike, Local};
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

/// Reads the year from the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn shared() -> SharedClock {
        Arc::new(Self)
    }
}

impl TimeProvider for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// A clock pinned to a given year. The year can be moved forward to simulate
/// a calendar change.
#[derive(Debug)]
pub struct FixedClock {
    year: AtomicI32,
}

impl FixedClock {
    pub fn new(year: i32) -> Self {
        Self {
            year: AtomicI32::new(year),
        }
    }

    pub fn shared(year: i32) -> Arc<Self> {
        Arc::new(Self::new(year))
    }

    pub fn set_year(&self, year: i32) {
        self.year.store(year, Ordering::Relaxed);
    }
}

impl TimeProvider for FixedClock {
    fn current_year(&self) -> i32 {
        self.year.load(Ordering::Relaxed)
    }
}
