//! The book catalog: the single owner of all books and their mutations.
//!
//! Mutators never fail. Referring to a book that does not exist leaves the
//! catalog untouched and reports [`Change::NotFound`]; callers that want a hard
//! error can turn the outcome into one with [`Change::into_result`].

mod builder;
mod events;

use std::fmt;

pub use builder::{CatalogBuilder, SAMPLE_BOOKS};
pub use events::{CatalogEvent, CatalogObserver, LoggingObserver, SubscriptionId};
use jiff::{tz::TimeZone, Timestamp};
use log::{debug, warn};

use crate::{
    clock::Clock,
    error::{Result, ShelfError},
    filter::BookFilter,
    models::{Book, BookId, DueStatus, Loan},
};

/// Outcome of a catalog mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Change {
    /// The book was modified
    Applied,

    /// The book exists but was already in the requested state
    Unchanged,

    /// No book has the given ID
    NotFound,
}

impl Change {
    pub fn is_applied(self) -> bool {
        self == Change::Applied
    }

    /// Reports a missing book as an error; otherwise whether anything changed.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::BookNotFound` for [`Change::NotFound`].
    pub fn into_result(self, id: BookId) -> Result<bool> {
        match self {
            Change::Applied => Ok(true),
            Change::Unchanged => Ok(false),
            Change::NotFound => Err(ShelfError::BookNotFound { id }),
        }
    }
}

/// Ordered, in-memory collection of books.
///
/// Built with [`CatalogBuilder`]. Insertion order is display order.
pub struct Catalog {
    books: Vec<Book>,
    next_id: u64,
    clock: Box<dyn Clock>,
    time_zone: TimeZone,
    observers: Vec<(SubscriptionId, Box<dyn CatalogObserver>)>,
    next_subscription: u64,
}

impl Catalog {
    fn new(clock: Box<dyn Clock>, time_zone: TimeZone) -> Self {
        Self {
            books: Vec::new(),
            next_id: 1,
            clock,
            time_zone,
            observers: Vec::new(),
            next_subscription: 1,
        }
    }

    /// Appends a new, available book and returns a copy of it.
    ///
    /// Titles and authors are taken as given; duplicates are allowed.
    pub fn add(&mut self, title: impl Into<String>, author: impl Into<String>) -> Book {
        let id = BookId(self.next_id);
        self.next_id += 1;

        let book = Book::new(id, title.into(), author.into());
        debug!("Added book {id}: {:?} by {:?}", book.title(), book.author());
        self.books.push(book.clone());
        self.notify(&CatalogEvent::Added(id));
        book
    }

    /// Lends a book out, due seven calendar days from now.
    ///
    /// Borrowing a book that is already out keeps its original dates. A due
    /// date outside jiff's range also leaves the book available and reports
    /// [`Change::Unchanged`].
    pub fn borrow(&mut self, id: BookId) -> Change {
        let Some(index) = self.position(id) else {
            debug!("Ignoring borrow of unknown book {id}");
            return Change::NotFound;
        };
        if self.books[index].is_borrowed() {
            debug!("Book {id} is already borrowed");
            return Change::Unchanged;
        }

        let loan = match Loan::starting_at(self.clock.now(), &self.time_zone) {
            Ok(loan) => loan,
            Err(e) => {
                warn!("Cannot compute due date for book {id}: {e}");
                return Change::Unchanged;
            }
        };
        self.books[index].lend(loan);
        debug!("Borrowed book {id}, due {}", loan.due_at());
        self.notify(&CatalogEvent::Borrowed(id));
        Change::Applied
    }

    /// Puts a borrowed book back on the shelf, clearing both loan dates.
    pub fn return_book(&mut self, id: BookId) -> Change {
        let Some(index) = self.position(id) else {
            debug!("Ignoring return of unknown book {id}");
            return Change::NotFound;
        };
        if !self.books[index].is_borrowed() {
            debug!("Book {id} is not borrowed");
            return Change::Unchanged;
        }

        self.books[index].take_back();
        debug!("Returned book {id}");
        self.notify(&CatalogEvent::Returned(id));
        Change::Applied
    }

    pub fn toggle_wishlist(&mut self, id: BookId) -> Change {
        let Some(index) = self.position(id) else {
            debug!("Ignoring wishlist toggle of unknown book {id}");
            return Change::NotFound;
        };
        let book = &mut self.books[index];
        book.toggle_wishlist();
        let in_wishlist = book.in_wishlist();
        self.notify(&CatalogEvent::WishlistToggled { id, in_wishlist });
        Change::Applied
    }

    pub fn toggle_favorite(&mut self, id: BookId) -> Change {
        let Some(index) = self.position(id) else {
            debug!("Ignoring favorite toggle of unknown book {id}");
            return Change::NotFound;
        };
        let book = &mut self.books[index];
        book.toggle_favorite();
        let favorited = book.is_favorited();
        self.notify(&CatalogEvent::FavoriteToggled { id, favorited });
        Change::Applied
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.position(id).map(|index| &self.books[index])
    }

    /// Every book, in insertion order.
    pub fn all_books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn borrowed_books(&self) -> Vec<Book> {
        self.select(Book::is_borrowed)
    }

    pub fn wishlist_books(&self) -> Vec<Book> {
        self.select(Book::in_wishlist)
    }

    pub fn favorited_books(&self) -> Vec<Book> {
        self.select(Book::is_favorited)
    }

    /// Borrowed books past their expected return date right now.
    pub fn overdue_books(&self) -> Vec<Book> {
        let now = self.clock.now();
        self.select(|book| book.is_overdue(now))
    }

    /// The search/availability view over the current catalog.
    pub fn filtered(&self, filter: &BookFilter) -> Vec<Book> {
        filter.apply(&self.books)
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Zone used for calendar arithmetic on due dates.
    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    pub fn is_overdue(&self, book: &Book) -> bool {
        book.is_overdue(self.clock.now())
    }

    /// Days remaining or overdue for `book` at the catalog's current time.
    pub fn days_remaining(&self, book: &Book) -> Option<DueStatus> {
        book.days_remaining(self.clock.now(), &self.time_zone)
    }

    /// Registers an observer that is called after every applied mutation.
    pub fn subscribe(&mut self, observer: Box<dyn CatalogObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, observer));
        id
    }

    /// Removes an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(subscription, _)| *subscription != id);
        self.observers.len() != before
    }

    // Books are only ever appended with increasing IDs, so the list stays
    // sorted by ID.
    fn position(&self, id: BookId) -> Option<usize> {
        self.books.binary_search_by_key(&id, Book::id).ok()
    }

    fn select<F>(&self, predicate: F) -> Vec<Book>
    where
        F: Fn(&Book) -> bool,
    {
        self.books
            .iter()
            .filter(|book| predicate(book))
            .cloned()
            .collect()
    }

    fn notify(&self, event: &CatalogEvent) {
        for (_, observer) in &self.observers {
            observer.on_change(event, &self.books);
        }
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("books", &self.books)
            .field("next_id", &self.next_id)
            .field("clock", &self.clock)
            .field("time_zone", &self.time_zone)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}
