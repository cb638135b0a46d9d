//! Builder for creating and configuring Catalog instances.

use jiff::tz::TimeZone;

use super::Catalog;
use crate::{
    clock::{Clock, SystemClock},
    error::{Result, ShelfError},
};

/// Demonstration books loaded by [`CatalogBuilder::with_sample_books`].
pub const SAMPLE_BOOKS: &[(&str, &str)] = &[
    ("The Great Gatsby", "F. Scott Fitzgerald"),
    ("To Kill a Mockingbird", "Harper Lee"),
    ("1984", "George Orwell"),
    ("Pride and Prejudice", "Jane Austen"),
    ("The Catcher in the Rye", "J.D. Salinger"),
];

/// Builder for creating and configuring Catalog instances.
#[derive(Debug)]
pub struct CatalogBuilder {
    clock: Option<Box<dyn Clock>>,
    time_zone: Option<TimeZone>,
    sample_books: bool,
}

impl CatalogBuilder {
    /// Creates a new builder: system clock, system time zone, no books.
    pub fn new() -> Self {
        Self {
            clock: None,
            time_zone: None,
            sample_books: false,
        }
    }

    /// Sets the time source used for lending dates and overdue checks.
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Sets the zone in which due dates are computed in calendar days.
    pub fn with_time_zone(mut self, time_zone: TimeZone) -> Self {
        self.time_zone = Some(time_zone);
        self
    }

    /// Looks up an IANA time zone by name, e.g. `Europe/Berlin`.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::InvalidTimeZone` if the zone is unknown to the
    /// system time zone database.
    pub fn with_time_zone_name(self, name: &str) -> Result<Self> {
        let time_zone = TimeZone::get(name).map_err(|source| ShelfError::InvalidTimeZone {
            name: name.to_string(),
            source,
        })?;
        Ok(self.with_time_zone(time_zone))
    }

    /// Seeds the catalog with [`SAMPLE_BOOKS`], all available.
    pub fn with_sample_books(mut self, enabled: bool) -> Self {
        self.sample_books = enabled;
        self
    }

    /// Builds the configured catalog.
    pub fn build(self) -> Catalog {
        let clock = self.clock.unwrap_or_else(|| Box::new(SystemClock));
        let time_zone = self.time_zone.unwrap_or_else(TimeZone::system);

        let mut catalog = Catalog::new(clock, time_zone);
        if self.sample_books {
            for (title, author) in SAMPLE_BOOKS {
                catalog.add(*title, *author);
            }
        }
        catalog
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
