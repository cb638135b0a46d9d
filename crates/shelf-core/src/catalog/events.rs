//! Change notifications emitted by the catalog.

use std::fmt;

use log::info;

use crate::models::{Book, BookId};

/// A mutation that was applied to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEvent {
    /// A new book was appended
    Added(BookId),
    /// A book was lent out
    Borrowed(BookId),
    /// A borrowed book came back
    Returned(BookId),
    /// The wishlist flag flipped to `in_wishlist`
    WishlistToggled { id: BookId, in_wishlist: bool },
    /// The favorite flag flipped to `favorited`
    FavoriteToggled { id: BookId, favorited: bool },
}

impl CatalogEvent {
    /// The book the event refers to.
    pub fn book_id(&self) -> BookId {
        match *self {
            CatalogEvent::Added(id)
            | CatalogEvent::Borrowed(id)
            | CatalogEvent::Returned(id)
            | CatalogEvent::WishlistToggled { id, .. }
            | CatalogEvent::FavoriteToggled { id, .. } => id,
        }
    }
}

impl fmt::Display for CatalogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogEvent::Added(id) => write!(f, "book {id} added"),
            CatalogEvent::Borrowed(id) => write!(f, "book {id} borrowed"),
            CatalogEvent::Returned(id) => write!(f, "book {id} returned"),
            CatalogEvent::WishlistToggled { id, in_wishlist: true } => {
                write!(f, "book {id} added to wishlist")
            }
            CatalogEvent::WishlistToggled { id, in_wishlist: false } => {
                write!(f, "book {id} removed from wishlist")
            }
            CatalogEvent::FavoriteToggled { id, favorited: true } => {
                write!(f, "book {id} marked as favorite")
            }
            CatalogEvent::FavoriteToggled { id, favorited: false } => {
                write!(f, "book {id} unmarked as favorite")
            }
        }
    }
}

/// Receives every applied catalog mutation together with the resulting book
/// list.
pub trait CatalogObserver {
    fn on_change(&self, event: &CatalogEvent, books: &[Book]);
}

impl<F> CatalogObserver for F
where
    F: Fn(&CatalogEvent, &[Book]),
{
    fn on_change(&self, event: &CatalogEvent, books: &[Book]) {
        self(event, books);
    }
}

/// Handle returned by `Catalog::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Logs every change at info level.
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl CatalogObserver for LoggingObserver {
    fn on_change(&self, event: &CatalogEvent, books: &[Book]) {
        info!("Catalog change: {event} ({} books)", books.len());
    }
}
