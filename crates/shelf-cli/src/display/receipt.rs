//! Lending receipts for borrowed books.

use std::fmt;

use shelf_core::Book;

use super::DueContext;

/// One receipt per borrowed book: lending date, expected return, and the days
/// remaining or overdue. Books without a loan are skipped.
pub struct Receipts<'a> {
    books: &'a [Book],
    due: DueContext<'a>,
}

impl<'a> Receipts<'a> {
    pub fn new(books: &'a [Book], due: DueContext<'a>) -> Self {
        Self { books, due }
    }
}

impl<'a> fmt::Display for Receipts<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Lending Receipts")?;
        writeln!(f)?;

        let mut any = false;
        for book in self.books {
            let Some(loan) = book.loan() else {
                continue;
            };
            any = true;

            let overdue = loan.is_overdue(self.due.now);
            let lent_at = loan.lent_at();
            let due_at = loan.due_at();
            writeln!(f, "## {}. {}", book.id(), book.title())?;
            writeln!(f, "- Author: {}", book.author())?;
            writeln!(
                f,
                "- Status: {}",
                if overdue { "Overdue" } else { "Borrowed" }
            )?;
            writeln!(f, "- Lending Date: {}", self.due.local(&lent_at))?;
            writeln!(f, "- Expected Return: {}", self.due.local(&due_at))?;
            match loan.due_status(self.due.now, self.due.time_zone) {
                Some(status) if status.is_overdue() => {
                    writeln!(f, "- Days Overdue: {}", status.days())?;
                }
                Some(status) => writeln!(f, "- Days Remaining: {}", status.days())?,
                None => writeln!(f, "- Days Remaining: N/A")?,
            }
            writeln!(f)?;
        }

        if !any {
            writeln!(f, "No books currently borrowed.")?;
            writeln!(f, "Borrow a book to see lending receipts here.")?;
        }
        Ok(())
    }
}
