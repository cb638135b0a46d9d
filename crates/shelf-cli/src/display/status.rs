//! Status lines for book mutations and rejected input.

use std::fmt;

use shelf_core::Book;

use super::DueContext;

/// Mutation a session command asked the catalog for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookAction {
    Borrow,
    Return,
    Wishlist,
    Favorite,
}

/// One-line result of a mutation on a book that exists.
///
/// `applied` says whether the catalog changed. Toggles always apply; borrow
/// and return are refused when the book is already in the requested state,
/// and borrow also when no due date can be computed.
pub struct ActionStatus<'a> {
    action: BookAction,
    book: &'a Book,
    applied: bool,
    due: DueContext<'a>,
}

impl<'a> ActionStatus<'a> {
    pub fn new(action: BookAction, book: &'a Book, applied: bool, due: DueContext<'a>) -> Self {
        Self {
            action,
            book,
            applied,
            due,
        }
    }
}

impl<'a> fmt::Display for ActionStatus<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let book = self.book;
        let title = book.title();
        match (self.action, self.applied) {
            (BookAction::Borrow, true) => match book.loan() {
                Some(loan) => {
                    let due_at = loan.due_at();
                    writeln!(
                        f,
                        "Success: Borrowed '{title}', due {}",
                        self.due.local(&due_at)
                    )
                }
                None => writeln!(f, "Success: Borrowed '{title}'"),
            },
            (BookAction::Borrow, false) if book.is_borrowed() => {
                writeln!(f, "Error: '{title}' is already borrowed")
            }
            (BookAction::Borrow, false) => {
                writeln!(f, "Error: Could not compute a due date for '{title}'")
            }
            (BookAction::Return, true) => writeln!(f, "Success: Returned '{title}'"),
            (BookAction::Return, false) => writeln!(f, "Error: '{title}' is not borrowed"),
            (BookAction::Wishlist, _) if book.in_wishlist() => {
                writeln!(f, "Success: Added '{title}' to the wishlist")
            }
            (BookAction::Wishlist, _) => {
                writeln!(f, "Success: Removed '{title}' from the wishlist")
            }
            (BookAction::Favorite, _) if book.is_favorited() => {
                writeln!(f, "Success: Marked '{title}' as favorite")
            }
            (BookAction::Favorite, _) => writeln!(f, "Success: Unmarked '{title}' as favorite"),
        }
    }
}

/// Error line for input or a command the session refused.
pub struct Rejection<T>(pub T);

impl<T: fmt::Display> fmt::Display for Rejection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error: {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use jiff::{tz::TimeZone, Timestamp};
    use shelf_core::{clock::ManualClock, BookId, CatalogBuilder, ShelfError};

    use super::*;

    fn status_of(action: BookAction, book: &Book, applied: bool, now: Timestamp) -> String {
        ActionStatus::new(action, book, applied, DueContext::new(now, &TimeZone::UTC)).to_string()
    }

    #[test]
    fn test_borrow_statuses() {
        let start = Timestamp::from_second(1640995200).unwrap();
        let mut catalog = CatalogBuilder::new()
            .with_clock(ManualClock::new(start))
            .with_time_zone(TimeZone::UTC)
            .build();
        let id = catalog.add("Dune", "Frank Herbert").id();

        let book = catalog.get(id).unwrap();
        assert_eq!(
            status_of(BookAction::Borrow, book, false, start),
            "Error: Could not compute a due date for 'Dune'\n"
        );
        assert_eq!(
            status_of(BookAction::Return, book, false, start),
            "Error: 'Dune' is not borrowed\n"
        );

        let _ = catalog.borrow(id);
        let book = catalog.get(id).unwrap();
        assert_eq!(
            status_of(BookAction::Borrow, book, true, start),
            "Success: Borrowed 'Dune', due 2022-01-08 00:00:00 UTC\n"
        );
        assert_eq!(
            status_of(BookAction::Borrow, book, false, start),
            "Error: 'Dune' is already borrowed\n"
        );
    }

    #[test]
    fn test_toggle_statuses_follow_flags() {
        let mut catalog = CatalogBuilder::new().build();
        let id = catalog.add("Dune", "Frank Herbert").id();
        let now = Timestamp::UNIX_EPOCH;

        let _ = catalog.toggle_wishlist(id);
        let book = catalog.get(id).unwrap();
        assert_eq!(
            status_of(BookAction::Wishlist, book, true, now),
            "Success: Added 'Dune' to the wishlist\n"
        );
        assert_eq!(
            status_of(BookAction::Favorite, book, true, now),
            "Success: Unmarked 'Dune' as favorite\n"
        );
    }

    #[test]
    fn test_rejection_display() {
        let rejection = Rejection(ShelfError::BookNotFound { id: BookId(9) });
        assert_eq!(rejection.to_string(), "Error: Book with ID 9 not found\n");
        assert_eq!(Rejection("missing closing quote").to_string(), "Error: missing closing quote\n");
    }
}
