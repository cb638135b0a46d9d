//! Session command definitions using clap
//!
//! Each line typed into a session is split into words and parsed with the
//! [`SessionLine`] parser below. Argument structs convert into the core
//! parameter types, keeping clap attributes out of `shelf-core`:
//!
//! ```text
//! Input line → words → SessionCommand (clap) → Core Params → Catalog
//! ```

use clap::{Args, Parser, Subcommand};
use shelf_core::{params::*, BookId};

/// One line of session input.
#[derive(Parser, Debug)]
#[command(
    name = "shelf",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "{all-args}"
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Add a book to the library
#[derive(Args, Debug)]
pub struct AddBookArgs {
    /// Title of the book (quote titles with spaces)
    pub title: String,
    /// Author of the book
    pub author: String,
}

impl From<AddBookArgs> for AddBook {
    fn from(val: AddBookArgs) -> Self {
        AddBook {
            title: val.title,
            author: val.author,
        }
    }
}

/// List books, optionally searching and hiding borrowed ones
#[derive(Args, Debug)]
pub struct ListBooksArgs {
    /// Only show books whose title or author contains this text
    #[arg(short, long)]
    pub query: Option<String>,
    /// Hide borrowed books
    #[arg(short, long)]
    pub available: bool,
    /// Print the matching books as JSON
    #[arg(long)]
    pub json: bool,
}

impl From<&ListBooksArgs> for ListBooks {
    fn from(val: &ListBooksArgs) -> Self {
        ListBooks {
            query: val.query.clone(),
            only_available: val.available,
        }
    }
}

/// Arguments for commands that act on a single book
#[derive(Args, Debug)]
pub struct BookIdArgs {
    /// ID of the book, as shown by `list`
    pub id: BookId,
}

impl From<BookIdArgs> for Id {
    fn from(val: BookIdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Add a book to the library
    #[command(alias = "a")]
    Add(AddBookArgs),
    /// List books in the library
    #[command(aliases = ["l", "ls"])]
    List(ListBooksArgs),
    /// Show details of a book
    #[command(alias = "s")]
    Show(BookIdArgs),
    /// Lend a book out for seven days
    #[command(alias = "b")]
    Borrow(BookIdArgs),
    /// Put a borrowed book back on the shelf
    #[command(alias = "r")]
    Return(BookIdArgs),
    /// Add a book to, or remove it from, the wishlist
    #[command(alias = "w")]
    Wishlist(BookIdArgs),
    /// Mark or unmark a book as favorite
    #[command(alias = "f")]
    Favorite(BookIdArgs),
    /// List books on the wishlist
    WishlistBooks,
    /// List favorite books
    Favorites,
    /// Show lending receipts for borrowed books
    Receipts,
    /// List borrowed books past their return date
    Overdue,
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(words: &[&str]) -> SessionCommand {
        SessionLine::try_parse_from(words).unwrap().command
    }

    #[test]
    fn test_session_line_definition_is_valid() {
        SessionLine::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        match parse(&["add", "The Hobbit", "Tolkien"]) {
            SessionCommand::Add(args) => {
                let params: AddBook = args.into();
                assert_eq!(params.title, "The Hobbit");
                assert_eq!(params.author, "Tolkien");
            }
            other => panic!("Expected Add, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_list_flags() {
        match parse(&["ls", "-q", "hob", "--available"]) {
            SessionCommand::List(args) => {
                let params = ListBooks::from(&args);
                assert_eq!(params.query.as_deref(), Some("hob"));
                assert!(params.only_available);
                assert!(!args.json);
            }
            other => panic!("Expected List, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_id_commands() {
        assert!(matches!(
            parse(&["b", "3"]),
            SessionCommand::Borrow(BookIdArgs { id: BookId(3) })
        ));
        assert!(matches!(
            parse(&["return", "3"]),
            SessionCommand::Return(BookIdArgs { id: BookId(3) })
        ));
        assert!(matches!(parse(&["wishlist-books"]), SessionCommand::WishlistBooks));
        assert!(matches!(parse(&["exit"]), SessionCommand::Quit));
    }

    #[test]
    fn test_parse_rejects_bad_id() {
        assert!(SessionLine::try_parse_from(["borrow", "nonexistent-id"]).is_err());
    }
}
