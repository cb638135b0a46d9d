use jiff::{tz::TimeZone, Timestamp};
use shelf_core::{clock::ManualClock, Catalog, CatalogBuilder};

/// Helper function to create a test catalog on a pinned UTC clock
pub fn create_test_catalog(start: &str) -> (Catalog, ManualClock) {
    let start: Timestamp = start.parse().expect("Failed to parse start time");
    let clock = ManualClock::new(start);
    let catalog = CatalogBuilder::new()
        .with_clock(clock.clone())
        .with_time_zone(TimeZone::UTC)
        .build();
    (catalog, clock)
}
