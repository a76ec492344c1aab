//! Time source used by the punch state machine and the calendar.
//! Production code reads the system clock; tests drive a `ManualClock`.

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use std::cell::Cell;
use std::rc::Rc;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Current local calendar date.
    fn today(&self) -> NaiveDate {
        self.now().with_timezone(&Local).date_naive()
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Settable clock. Clones share the same instant, so a test can keep one
/// handle while the app state owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        self.now.set(instant);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}
