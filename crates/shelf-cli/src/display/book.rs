//! Single-book display.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};
use shelf_core::{Book, Catalog};

use super::LocalDateTime;

/// The instant and zone due dates are judged against.
#[derive(Clone, Copy)]
pub struct DueContext<'a> {
    pub now: Timestamp,
    pub time_zone: &'a TimeZone,
}

impl<'a> DueContext<'a> {
    pub fn new(now: Timestamp, time_zone: &'a TimeZone) -> Self {
        Self { now, time_zone }
    }

    /// Current time and zone of `catalog`.
    pub fn of(catalog: &'a Catalog) -> Self {
        Self::new(catalog.now(), catalog.time_zone())
    }

    pub(crate) fn local<'b>(&'b self, timestamp: &'b Timestamp) -> LocalDateTime<'b> {
        LocalDateTime::new(timestamp, self.time_zone)
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Full details of one book, including loan dates when it is lent out.
pub struct BookDetails<'a> {
    book: &'a Book,
    due: DueContext<'a>,
}

impl<'a> BookDetails<'a> {
    pub fn new(book: &'a Book, due: DueContext<'a>) -> Self {
        Self { book, due }
    }
}

impl<'a> fmt::Display for BookDetails<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let book = self.book;
        writeln!(f, "# {}. {}", book.id(), book.title())?;
        writeln!(f)?;
        writeln!(f, "- Author: {}", book.author())?;
        writeln!(f, "- Status: {}", book.status().with_icon())?;
        writeln!(f, "- Wishlist: {}", yes_no(book.in_wishlist()))?;
        writeln!(f, "- Favorite: {}", yes_no(book.is_favorited()))?;

        if let Some(loan) = book.loan() {
            let lent_at = loan.lent_at();
            let due_at = loan.due_at();
            writeln!(f, "- Lending Date: {}", self.due.local(&lent_at))?;
            writeln!(f, "- Expected Return: {}", self.due.local(&due_at))?;
            if let Some(status) = loan.due_status(self.due.now, self.due.time_zone) {
                writeln!(f, "- Due: {status}")?;
            }
        }
        writeln!(f)
    }
}
