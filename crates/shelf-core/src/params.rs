//! Request parameters for catalog operations.
//!
//! These carry user input from an interface layer (the CLI session) into the
//! core. Validation that the catalog itself does not enforce lives here, so
//! every interface rejects the same input the same way.

use crate::{
    catalog::Catalog,
    error::{Result, ShelfError},
    models::{Book, BookId},
};

/// Parameters for adding a book.
#[derive(Debug, Clone, Default)]
pub struct AddBook {
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
}

impl AddBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    /// Rejects blank titles and authors.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::InvalidInput` naming the first blank field.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ShelfError::invalid_input("title").with_reason("Title must not be empty"));
        }
        if self.author.trim().is_empty() {
            return Err(
                ShelfError::invalid_input("author").with_reason("Author must not be empty")
            );
        }
        Ok(())
    }

    /// Validates and adds the book to `catalog`.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::InvalidInput` if validation fails; the catalog is
    /// left untouched.
    pub fn apply(self, catalog: &mut Catalog) -> Result<Book> {
        self.validate()?;
        Ok(catalog.add(self.title, self.author))
    }
}

/// Generic parameters for operations requiring just a book ID.
///
/// Used for borrow, return, wishlist and favorite toggles, and show.
#[derive(Debug, Clone, Copy)]
pub struct Id {
    /// The ID of the book to operate on
    pub id: BookId,
}

/// Parameters for listing books through the search/availability view.
#[derive(Debug, Clone, Default)]
pub struct ListBooks {
    /// Search text matched against title and author
    pub query: Option<String>,
    /// Hide borrowed books
    pub only_available: bool,
}

impl From<&ListBooks> for crate::filter::BookFilter {
    fn from(params: &ListBooks) -> Self {
        Self {
            query: params.query.clone().unwrap_or_default(),
            only_available: params.only_available,
        }
    }
}
