//! Time sources for the catalog.
//!
//! The catalog never calls `Timestamp::now()` directly; it asks its [`Clock`].
//! [`SystemClock`] is used by the application, [`ManualClock`] lets callers
//! pin and advance time.

use std::{cell::Cell, fmt, rc::Rc};

use jiff::{SignedDuration, Timestamp};

/// Source of the current instant.
pub trait Clock: fmt::Debug {
    fn now(&self) -> Timestamp;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same instant, so a handle kept outside the catalog can
/// advance the time the catalog sees.
///
/// ```rust
/// use jiff::{SignedDuration, Timestamp};
/// use shelf_core::clock::{Clock, ManualClock};
///
/// let clock = ManualClock::new(Timestamp::UNIX_EPOCH);
/// let handle = clock.clone();
/// handle.advance(SignedDuration::from_hours(24));
/// assert_eq!(clock.now(), Timestamp::from_second(86_400).unwrap());
/// ```
#[derive(Clone)]
pub struct ManualClock {
    now: Rc<Cell<Timestamp>>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, now: Timestamp) {
        self.now.set(now);
    }

    /// Moves the clock forward (or backward, for a negative duration).
    ///
    /// The clock stays put if the result would leave the supported range.
    pub fn advance(&self, by: SignedDuration) {
        if let Ok(next) = self.now.get().checked_add(by) {
            self.now.set(next);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}

impl fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualClock")
            .field("now", &self.now.get())
            .finish()
    }
}
