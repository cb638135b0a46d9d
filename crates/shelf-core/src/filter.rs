//! Search and availability filtering over a list of books.

use crate::models::{fold_case, Book};

/// Filter options for the visible book list.
///
/// Both predicates are optional and combine with AND. An empty `query`
/// matches everything; it is not trimmed, so a single space only matches
/// titles or authors containing a space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Case-insensitive substring matched against title or author
    pub query: String,

    /// Hide borrowed books
    pub only_available: bool,
}

impl BookFilter {
    /// Filter on search text only.
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            only_available: false,
        }
    }

    /// Filter that keeps only books on the shelf.
    pub fn available() -> Self {
        Self {
            only_available: true,
            ..Default::default()
        }
    }

    pub fn with_only_available(mut self, only_available: bool) -> Self {
        self.only_available = only_available;
        self
    }

    /// Books passing both predicates, in input order.
    ///
    /// ```rust
    /// use shelf_core::{BookFilter, CatalogBuilder};
    ///
    /// let mut catalog = CatalogBuilder::new().build();
    /// catalog.add("The Hobbit", "J.R.R. Tolkien");
    /// catalog.add("Dune", "Frank Herbert");
    ///
    /// let hits = BookFilter::search("TOLKIEN").apply(catalog.all_books());
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].title(), "The Hobbit");
    /// ```
    pub fn apply<'a, I>(&self, books: I) -> Vec<Book>
    where
        I: IntoIterator<Item = &'a Book>,
    {
        let needle = fold_case(&self.query);
        books
            .into_iter()
            .filter(|book| needle.is_empty() || book.matches_folded(&needle))
            .filter(|book| !self.only_available || !book.is_borrowed())
            .cloned()
            .collect()
    }
}
