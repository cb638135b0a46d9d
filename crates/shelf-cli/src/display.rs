//! Display wrapper types for formatting catalog output.
//!
//! The core crate hands out plain [`Book`](shelf_core::Book) values; every
//! piece of presentation lives here. Wrappers hold references plus whatever
//! context they need (the current instant and time zone for due dates) and
//! produce markdown that the [`crate::renderer::TerminalRenderer`] prints.
//!
//! ## Module Organization
//!
//! - [`book`]: Single-book details (`show`, `add`)
//! - [`collections`]: Book lists (`list`, `wishlist-books`, `favorites`)
//! - [`receipt`]: Lending receipts for borrowed books
//! - [`status`]: Success/failure lines for mutations and rejected input
//! - [`datetime`]: Timestamp formatting in the catalog's time zone

pub mod book;
pub mod collections;
pub mod datetime;
pub mod receipt;
pub mod status;

pub use book::{BookDetails, DueContext};
pub use collections::BookList;
pub use datetime::LocalDateTime;
pub use receipt::Receipts;
pub use status::{ActionStatus, BookAction, Rejection};
