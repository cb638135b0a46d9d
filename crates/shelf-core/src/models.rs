//! Data models for books and loans.
//!
//! A [`Book`] carries its lending dates together in an optional [`Loan`], so a
//! book is borrowed exactly when both the lending date and the expected
//! return date are present. Everything else about the borrow state
//! ([`BookStatus`], overdue detection, days remaining) is derived from that
//! loan and a point in time supplied by the caller.
//!
//! # Examples
//!
//! ```rust
//! use jiff::{tz::TimeZone, Timestamp, ToSpan};
//! use shelf_core::models::{DueStatus, Loan};
//!
//! let lent_at: Timestamp = "2024-03-01T10:00:00Z".parse().unwrap();
//! let loan = Loan::starting_at(lent_at, &TimeZone::UTC).unwrap();
//! assert_eq!(loan.due_at(), lent_at.checked_add(168.hours()).unwrap());
//!
//! let later = lent_at.checked_add(192.hours()).unwrap();
//! assert!(loan.is_overdue(later));
//! assert_eq!(loan.due_status(later, &TimeZone::UTC), Some(DueStatus::Overdue(1)));
//! ```

use std::{fmt, str::FromStr};

use jiff::{tz::TimeZone, Timestamp, ToSpan};
use serde::{ser::SerializeStruct, Serialize, Serializer};

/// Number of calendar days a book may be kept before it is overdue.
pub const LOAN_PERIOD_DAYS: i64 = 7;

/// Opaque identifier of a book within a catalog.
///
/// Identifiers are handed out by the catalog in increasing order and are never
/// reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BookId(pub u64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(BookId)
            .map_err(|_| format!("Invalid book ID: {s}"))
    }
}

/// Two-valued borrow state of a book.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    /// On the shelf
    #[default]
    Available,

    /// Lent out
    Borrowed,
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl BookStatus {
    /// Human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "Available",
            BookStatus::Borrowed => "Borrowed",
        }
    }

    /// Label with a status icon for list output.
    ///
    /// ```rust
    /// use shelf_core::models::BookStatus;
    ///
    /// assert_eq!(BookStatus::Available.with_icon(), "○ Available");
    /// assert_eq!(BookStatus::Borrowed.with_icon(), "➤ Borrowed");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            BookStatus::Available => "○ Available",
            BookStatus::Borrowed => "➤ Borrowed",
        }
    }
}

/// Lending dates of a borrowed book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loan {
    /// When the book was lent out (UTC)
    lent_at: Timestamp,

    /// When the book is expected back (UTC)
    due_at: Timestamp,
}

impl Loan {
    /// Starts a loan at `lent_at`, due [`LOAN_PERIOD_DAYS`] calendar days later
    /// in the given time zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the due date falls outside jiff's supported range.
    pub fn starting_at(lent_at: Timestamp, tz: &TimeZone) -> Result<Self, jiff::Error> {
        let due_at = lent_at
            .to_zoned(tz.clone())
            .checked_add(LOAN_PERIOD_DAYS.days())?
            .timestamp();
        Ok(Self { lent_at, due_at })
    }

    pub fn lent_at(&self) -> Timestamp {
        self.lent_at
    }

    pub fn due_at(&self) -> Timestamp {
        self.due_at
    }

    /// A loan is overdue strictly after its due instant.
    pub fn is_overdue(&self, now: Timestamp) -> bool {
        now > self.due_at
    }

    /// Calendar-day distance between `now` and the due date, both taken as
    /// civil dates in `tz`.
    ///
    /// Returns `None` only if the date arithmetic leaves jiff's range.
    pub fn due_status(&self, now: Timestamp, tz: &TimeZone) -> Option<DueStatus> {
        let today = now.to_zoned(tz.clone()).date();
        let due_day = self.due_at.to_zoned(tz.clone()).date();
        let days = i64::from(today.until(due_day).ok()?.get_days());

        if self.is_overdue(now) {
            Some(DueStatus::Overdue(days.unsigned_abs()))
        } else {
            Some(DueStatus::Remaining(days.unsigned_abs()))
        }
    }
}

/// How far a borrowed book is from its expected return date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    /// Days left before the book is due
    Remaining(u64),

    /// Days since the book became due
    Overdue(u64),
}

impl DueStatus {
    pub fn is_overdue(&self) -> bool {
        matches!(self, DueStatus::Overdue(_))
    }

    pub fn days(&self) -> u64 {
        match self {
            DueStatus::Remaining(days) | DueStatus::Overdue(days) => *days,
        }
    }
}

impl fmt::Display for DueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueStatus::Remaining(1) => write!(f, "1 day remaining"),
            DueStatus::Remaining(days) => write!(f, "{days} days remaining"),
            DueStatus::Overdue(1) => write!(f, "1 day overdue"),
            DueStatus::Overdue(days) => write!(f, "{days} days overdue"),
        }
    }
}

/// Unicode full case folding, so `ß` and `SS` compare equal.
pub(crate) fn fold_case(text: &str) -> String {
    caseless::default_case_fold_str(text)
}

/// A book tracked by the catalog.
///
/// Serializes flat, with the derived `status` next to the two loan dates
/// (`null` while the book is on the shelf).
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    /// Unique identifier, assigned by the catalog
    id: BookId,

    /// Title of the book
    title: String,

    /// Author of the book
    author: String,

    /// Present while the book is lent out
    loan: Option<Loan>,

    /// Marked for the wishlist
    in_wishlist: bool,

    /// Marked as a favorite
    favorited: bool,
}

impl Serialize for Book {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Book", 8)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("author", &self.author)?;
        state.serialize_field("status", &self.status())?;
        state.serialize_field("lending_date", &self.lending_date())?;
        state.serialize_field("expected_return_date", &self.expected_return_date())?;
        state.serialize_field("in_wishlist", &self.in_wishlist)?;
        state.serialize_field("favorited", &self.favorited)?;
        state.end()
    }
}

impl Book {
    /// Creates an available book with no flags set.
    pub(crate) fn new(id: BookId, title: String, author: String) -> Self {
        Self {
            id,
            title,
            author,
            loan: None,
            in_wishlist: false,
            favorited: false,
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn loan(&self) -> Option<&Loan> {
        self.loan.as_ref()
    }

    pub fn is_borrowed(&self) -> bool {
        self.loan.is_some()
    }

    pub fn in_wishlist(&self) -> bool {
        self.in_wishlist
    }

    pub fn is_favorited(&self) -> bool {
        self.favorited
    }

    pub fn lending_date(&self) -> Option<Timestamp> {
        self.loan.map(|loan| loan.lent_at)
    }

    pub fn expected_return_date(&self) -> Option<Timestamp> {
        self.loan.map(|loan| loan.due_at)
    }

    pub fn status(&self) -> BookStatus {
        if self.is_borrowed() {
            BookStatus::Borrowed
        } else {
            BookStatus::Available
        }
    }

    /// Borrowed and past the expected return date at `now`.
    pub fn is_overdue(&self, now: Timestamp) -> bool {
        self.loan.is_some_and(|loan| loan.is_overdue(now))
    }

    /// Days remaining or overdue; `None` when the book is not lent out.
    pub fn days_remaining(&self, now: Timestamp, tz: &TimeZone) -> Option<DueStatus> {
        self.loan.as_ref()?.due_status(now, tz)
    }

    /// Case-insensitive substring match against title or author.
    ///
    /// `needle` must already be case folded with [`fold_case`].
    pub(crate) fn matches_folded(&self, needle: &str) -> bool {
        fold_case(&self.title).contains(needle) || fold_case(&self.author).contains(needle)
    }

    pub(crate) fn lend(&mut self, loan: Loan) {
        self.loan = Some(loan);
    }

    pub(crate) fn take_back(&mut self) {
        self.loan = None;
    }

    pub(crate) fn toggle_wishlist(&mut self) {
        self.in_wishlist = !self.in_wishlist;
    }

    pub(crate) fn toggle_favorite(&mut self) {
        self.favorited = !self.favorited;
    }
}

#[cfg(test)]
mod tests {
    use jiff::tz::offset;

    use super::*;

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    fn create_test_book() -> Book {
        Book::new(BookId(7), "Dune".to_string(), "Frank Herbert".to_string())
    }

    #[test]
    fn test_new_book_defaults() {
        let book = create_test_book();

        assert_eq!(book.id(), BookId(7));
        assert_eq!(book.title(), "Dune");
        assert_eq!(book.author(), "Frank Herbert");
        assert!(!book.is_borrowed());
        assert!(!book.in_wishlist());
        assert!(!book.is_favorited());
        assert_eq!(book.lending_date(), None);
        assert_eq!(book.expected_return_date(), None);
        assert_eq!(book.status(), BookStatus::Available);
    }

    #[test]
    fn test_book_status_labels() {
        assert_eq!(BookStatus::Available.to_string(), "Available");
        assert_eq!(BookStatus::Borrowed.to_string(), "Borrowed");
    }

    #[test]
    fn test_book_id_from_str() {
        assert_eq!("12".parse::<BookId>(), Ok(BookId(12)));
        assert_eq!(" 3 ".parse::<BookId>(), Ok(BookId(3)));
        assert!("nonexistent-id".parse::<BookId>().is_err());
    }

    #[test]
    fn test_loan_due_seven_days_later() {
        let lent_at = ts("2024-03-01T10:00:00Z");
        let loan = Loan::starting_at(lent_at, &TimeZone::UTC).unwrap();

        assert_eq!(loan.lent_at(), lent_at);
        assert_eq!(loan.due_at(), ts("2024-03-08T10:00:00Z"));
    }

    #[test]
    fn test_due_status_uses_civil_dates_of_time_zone() {
        let tokyo = TimeZone::fixed(offset(9));
        let loan = Loan::starting_at(ts("2024-03-01T20:00:00Z"), &tokyo).unwrap();
        let now = ts("2024-03-08T14:00:00Z");

        // 23:00 on the 8th in UTC+9, due 05:00 on the 9th local time.
        assert_eq!(loan.due_status(now, &tokyo), Some(DueStatus::Remaining(1)));
        assert_eq!(loan.due_status(now, &TimeZone::UTC), Some(DueStatus::Remaining(0)));
    }

    #[test]
    fn test_overdue_is_strict() {
        let loan = Loan::starting_at(ts("2024-03-01T10:00:00Z"), &TimeZone::UTC).unwrap();

        assert!(!loan.is_overdue(loan.due_at()));
        assert!(loan.is_overdue(ts("2024-03-08T10:00:01Z")));
        assert!(!loan.is_overdue(ts("2024-03-05T00:00:00Z")));
    }

    #[test]
    fn test_due_status_remaining() {
        let loan = Loan::starting_at(ts("2024-03-01T10:00:00Z"), &TimeZone::UTC).unwrap();

        assert_eq!(
            loan.due_status(ts("2024-03-01T10:00:00Z"), &TimeZone::UTC),
            Some(DueStatus::Remaining(7))
        );
        // Calendar days, not 24h periods: late on the 6th is still two days out.
        assert_eq!(
            loan.due_status(ts("2024-03-06T23:00:00Z"), &TimeZone::UTC),
            Some(DueStatus::Remaining(2))
        );
        assert_eq!(
            loan.due_status(ts("2024-03-08T09:00:00Z"), &TimeZone::UTC),
            Some(DueStatus::Remaining(0))
        );
    }

    #[test]
    fn test_due_status_overdue() {
        let loan = Loan::starting_at(ts("2024-03-01T10:00:00Z"), &TimeZone::UTC).unwrap();

        assert_eq!(
            loan.due_status(ts("2024-03-08T11:00:00Z"), &TimeZone::UTC),
            Some(DueStatus::Overdue(0))
        );
        assert_eq!(
            loan.due_status(ts("2024-03-09T10:00:00Z"), &TimeZone::UTC),
            Some(DueStatus::Overdue(1))
        );
        assert_eq!(
            loan.due_status(ts("2024-03-20T00:00:00Z"), &TimeZone::UTC),
            Some(DueStatus::Overdue(12))
        );
    }

    #[test]
    fn test_days_remaining_not_applicable_without_loan() {
        let book = create_test_book();
        assert_eq!(
            book.days_remaining(ts("2024-03-01T10:00:00Z"), &TimeZone::UTC),
            None
        );
        assert!(!book.is_overdue(ts("2024-03-01T10:00:00Z")));
    }

    #[test]
    fn test_lend_and_take_back_keep_flags() {
        let mut book = create_test_book();
        book.toggle_wishlist();
        book.toggle_favorite();

        let loan = Loan::starting_at(ts("2024-03-01T10:00:00Z"), &TimeZone::UTC).unwrap();
        book.lend(loan);
        assert_eq!(book.status(), BookStatus::Borrowed);
        assert_eq!(book.lending_date(), Some(loan.lent_at()));
        assert_eq!(book.expected_return_date(), Some(loan.due_at()));

        book.take_back();
        assert!(!book.is_borrowed());
        assert_eq!(book.lending_date(), None);
        assert_eq!(book.expected_return_date(), None);
        assert!(book.in_wishlist());
        assert!(book.is_favorited());
    }

    #[test]
    fn test_matches_folded_unicode() {
        let book = Book::new(BookId(1), "Die Straße".to_string(), "Ödön".to_string());

        assert!(book.matches_folded(&fold_case("STRASSE")));
        assert!(book.matches_folded(&fold_case("straße")));
        assert!(book.matches_folded(&fold_case("ÖDÖN")));
        assert!(!book.matches_folded(&fold_case("hobbit")));
    }

    #[test]
    fn test_fold_case_differs_from_lowercase() {
        assert_eq!(fold_case("Weiß"), "weiss");
        assert_eq!(fold_case("WEISS"), "weiss");
        assert_eq!(fold_case("ΣΟΦΟΣ"), fold_case("σοφος"));
    }

    #[test]
    fn test_due_status_display() {
        assert_eq!(DueStatus::Remaining(1).to_string(), "1 day remaining");
        assert_eq!(DueStatus::Remaining(5).to_string(), "5 days remaining");
        assert_eq!(DueStatus::Overdue(1).to_string(), "1 day overdue");
        assert_eq!(DueStatus::Overdue(3).to_string(), "3 days overdue");
        assert!(DueStatus::Overdue(3).is_overdue());
        assert_eq!(DueStatus::Remaining(4).days(), 4);
    }

    #[test]
    fn test_book_serializes_status_and_loan_dates() {
        let mut book = create_test_book();

        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["status"], "available");
        assert!(json["lending_date"].is_null());
        assert!(json["expected_return_date"].is_null());

        book.lend(Loan::starting_at(ts("2024-03-01T10:00:00Z"), &TimeZone::UTC).unwrap());
        book.toggle_favorite();

        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["status"], "borrowed");
        assert_eq!(json["lending_date"], "2024-03-01T10:00:00Z");
        assert_eq!(json["expected_return_date"], "2024-03-08T10:00:00Z");
        assert_eq!(json["in_wishlist"], false);
        assert_eq!(json["favorited"], true);
        assert!(json.get("loan").is_none());
    }
}
