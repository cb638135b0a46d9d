//! Collection wrapper types for displaying lists of books.

use std::fmt;

use shelf_core::Book;

use super::DueContext;

/// A titled list of books, one line per book.
///
/// Each line shows the ID, title, author and status, followed by `♥` for
/// wishlist books, `★` for favorites and `(overdue)` for late loans.
pub struct BookList<'a> {
    books: &'a [Book],
    title: Option<&'a str>,
    empty_message: &'a str,
    due: DueContext<'a>,
}

impl<'a> BookList<'a> {
    pub fn new(books: &'a [Book], due: DueContext<'a>) -> Self {
        Self {
            books,
            title: None,
            empty_message: "No books found.",
            due,
        }
    }

    /// Adds a `#` header above the list.
    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Replaces the line shown when the list is empty.
    pub fn with_empty_message(mut self, message: &'a str) -> Self {
        self.empty_message = message;
        self
    }
}

impl<'a> fmt::Display for BookList<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = self.title {
            writeln!(f, "# {title}")?;
            writeln!(f)?;
        }

        if self.books.is_empty() {
            return writeln!(f, "{}", self.empty_message);
        }

        for book in self.books {
            write!(
                f,
                "- **{}.** {} by {} ({})",
                book.id(),
                book.title(),
                book.author(),
                book.status().with_icon()
            )?;
            if book.in_wishlist() {
                write!(f, " ♥")?;
            }
            if book.is_favorited() {
                write!(f, " ★")?;
            }
            if book.is_overdue(self.due.now) {
                write!(f, " (overdue)")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::{tz::TimeZone, SignedDuration, Timestamp};
    use shelf_core::{clock::ManualClock, CatalogBuilder};

    use super::*;

    #[test]
    fn test_empty_list_message() {
        let books: Vec<Book> = Vec::new();
        let tz = TimeZone::UTC;
        let due = DueContext::new(Timestamp::UNIX_EPOCH, &tz);

        let output = BookList::new(&books, due).to_string();
        assert_eq!(output, "No books found.\n");

        let output = BookList::new(&books, due)
            .with_title("Wishlist")
            .with_empty_message("Your wishlist is empty.")
            .to_string();
        assert_eq!(output, "# Wishlist\n\nYour wishlist is empty.\n");
    }

    #[test]
    fn test_list_lines_carry_markers() {
        let clock = ManualClock::new(Timestamp::UNIX_EPOCH);
        let mut catalog = CatalogBuilder::new()
            .with_clock(clock.clone())
            .with_time_zone(TimeZone::UTC)
            .build();
        let hobbit = catalog.add("The Hobbit", "Tolkien").id();
        catalog.add("Dune", "Herbert");
        let _ = catalog.toggle_wishlist(hobbit);
        let _ = catalog.toggle_favorite(hobbit);
        let _ = catalog.borrow(hobbit);
        clock.advance(SignedDuration::from_hours(10 * 24));

        let output = BookList::new(catalog.all_books(), DueContext::of(&catalog))
            .with_title("Library")
            .to_string();

        assert!(output.starts_with("# Library\n\n"));
        assert!(output.contains("- **1.** The Hobbit by Tolkien (➤ Borrowed) ♥ ★ (overdue)\n"));
        assert!(output.contains("- **2.** Dune by Herbert (○ Available)\n"));
    }
}
