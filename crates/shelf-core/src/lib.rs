//! Core library for the Shelf personal library tracker.
//!
//! This crate holds the book catalog and everything derived from it: the
//! [`Book`] record, the [`Catalog`] that owns and mutates books, the
//! [`BookFilter`] search view, and due-date computation. It does no I/O and
//! keeps no state beyond the catalog value itself; presentation (lists,
//! receipts, date formatting) belongs to the caller.
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::{tz::TimeZone, SignedDuration, Timestamp};
//! use shelf_core::{clock::ManualClock, BookFilter, CatalogBuilder, DueStatus};
//!
//! let clock = ManualClock::new("2024-03-01T10:00:00Z".parse::<Timestamp>().unwrap());
//! let mut catalog = CatalogBuilder::new()
//!     .with_clock(clock.clone())
//!     .with_time_zone(TimeZone::UTC)
//!     .build();
//!
//! let hobbit = catalog.add("The Hobbit", "J.R.R. Tolkien");
//! catalog.add("Dune", "Frank Herbert");
//!
//! assert!(catalog.borrow(hobbit.id()).is_applied());
//! assert_eq!(catalog.filtered(&BookFilter::available()).len(), 1);
//!
//! clock.advance(SignedDuration::from_hours(8 * 24));
//! let book = catalog.get(hobbit.id()).unwrap();
//! assert_eq!(catalog.days_remaining(book), Some(DueStatus::Overdue(1)));
//! ```

pub mod catalog;
pub mod clock;
pub mod error;
pub mod filter;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use catalog::{
    Catalog, CatalogBuilder, CatalogEvent, CatalogObserver, Change, LoggingObserver,
    SubscriptionId,
};
pub use error::{Result, ShelfError};
pub use filter::BookFilter;
pub use models::{Book, BookId, BookStatus, DueStatus, Loan, LOAN_PERIOD_DAYS};
pub use params::{AddBook, Id, ListBooks};
