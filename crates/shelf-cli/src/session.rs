//! Interactive session over one catalog.
//!
//! A [`Session`] owns the catalog for the lifetime of the process. Each input
//! line is parsed into a [`SessionCommand`], applied to the catalog, and
//! answered with markdown for the renderer.

use std::io::BufRead;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use log::{debug, warn};
use shelf_core::{
    params::{AddBook, Id, ListBooks},
    Book, BookFilter, BookId, Catalog, Change, ShelfError,
};

use crate::{
    cli::{SessionCommand, SessionLine},
    display::{
        ActionStatus, BookAction, BookDetails, BookList, DueContext, Receipts, Rejection,
    },
    renderer::TerminalRenderer,
};

/// What the session wants done after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Markdown to render (possibly empty)
    Output(String),
    /// End the session
    Quit,
}

pub struct Session {
    catalog: Catalog,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Reads commands until end of input or `quit`.
    pub fn run<R: BufRead>(
        &mut self,
        mut input: R,
        renderer: &TerminalRenderer,
        interactive: bool,
    ) -> Result<()> {
        let mut line = String::new();
        loop {
            if interactive {
                renderer.prompt().context("Failed to write prompt")?;
            }

            line.clear();
            if input.read_line(&mut line).context("Failed to read input")? == 0 {
                break;
            }

            match self.execute(&line)? {
                Reply::Output(text) if text.is_empty() => {}
                Reply::Output(text) => renderer.render(&text).context("Failed to write output")?,
                Reply::Quit => break,
            }
        }
        Ok(())
    }

    /// Parses and applies one input line.
    pub fn execute(&mut self, line: &str) -> Result<Reply> {
        let words = match shell_words::split(line) {
            Ok(words) => words,
            Err(e) => {
                warn!("Rejected input: {e}");
                let reason = format!("Cannot parse input: {e}");
                return Ok(Reply::Output(Rejection(reason).to_string()));
            }
        };
        if words.is_empty() {
            return Ok(Reply::Output(String::new()));
        }

        let command = match SessionLine::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                if !matches!(
                    e.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    warn!("Rejected command {:?}: {}", words[0], e.kind());
                }
                return Ok(Reply::Output(e.render().to_string()));
            }
        };
        debug!("Executing {command:?}");
        self.dispatch(command)
    }

    fn dispatch(&mut self, command: SessionCommand) -> Result<Reply> {
        let output = match command {
            SessionCommand::Add(args) => self.add(args.into()),
            SessionCommand::List(args) => {
                return self.list(&ListBooks::from(&args), args.json).map(Reply::Output)
            }
            SessionCommand::Show(args) => self.show(args.into()),
            SessionCommand::Borrow(args) => self.mutate(args.into(), BookAction::Borrow),
            SessionCommand::Return(args) => self.mutate(args.into(), BookAction::Return),
            SessionCommand::Wishlist(args) => self.mutate(args.into(), BookAction::Wishlist),
            SessionCommand::Favorite(args) => self.mutate(args.into(), BookAction::Favorite),
            SessionCommand::WishlistBooks => self.titled_list(
                &self.catalog.wishlist_books(),
                "Wishlist",
                "Your wishlist is empty.",
            ),
            SessionCommand::Favorites => self.titled_list(
                &self.catalog.favorited_books(),
                "Favorites",
                "No favorite books yet.",
            ),
            SessionCommand::Receipts => {
                let borrowed = self.catalog.borrowed_books();
                Receipts::new(&borrowed, DueContext::of(&self.catalog)).to_string()
            }
            SessionCommand::Overdue => self.titled_list(
                &self.catalog.overdue_books(),
                "Overdue Books",
                "No overdue books.",
            ),
            SessionCommand::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Output(output))
    }

    fn add(&mut self, params: AddBook) -> String {
        match params.apply(&mut self.catalog) {
            Ok(book) => format!(
                "Added book with ID: {}\n\n{}",
                book.id(),
                BookDetails::new(&book, DueContext::of(&self.catalog))
            ),
            Err(e) => {
                warn!("Rejected book: {e}");
                Rejection(e).to_string()
            }
        }
    }

    fn list(&self, params: &ListBooks, json: bool) -> Result<String> {
        let books = self.catalog.filtered(&BookFilter::from(params));
        if json {
            let mut out = serde_json::to_string_pretty(&books).map_err(ShelfError::from)?;
            out.push('\n');
            return Ok(out);
        }
        Ok(self.titled_list(&books, "Library", "No books found."))
    }

    fn show(&self, params: Id) -> String {
        match self.catalog.get(params.id) {
            Some(book) => BookDetails::new(book, DueContext::of(&self.catalog)).to_string(),
            None => not_found(params.id),
        }
    }

    fn mutate(&mut self, params: Id, action: BookAction) -> String {
        let id = params.id;
        let change = match action {
            BookAction::Borrow => self.catalog.borrow(id),
            BookAction::Return => self.catalog.return_book(id),
            BookAction::Wishlist => self.catalog.toggle_wishlist(id),
            BookAction::Favorite => self.catalog.toggle_favorite(id),
        };
        self.report(id, change, action)
    }

    /// Turns a mutation outcome into a status line for the book after the
    /// mutation.
    fn report(&self, id: BookId, change: Change, action: BookAction) -> String {
        let applied = match change.into_result(id) {
            Ok(applied) => applied,
            Err(e) => {
                warn!("{e}");
                return Rejection(e).to_string();
            }
        };
        let Some(book) = self.catalog.get(id) else {
            return not_found(id);
        };
        if !applied {
            warn!("{action:?} of book {id} changed nothing");
        }

        ActionStatus::new(action, book, applied, DueContext::of(&self.catalog)).to_string()
    }

    fn titled_list(&self, books: &[Book], title: &str, empty_message: &str) -> String {
        BookList::new(books, DueContext::of(&self.catalog))
            .with_title(title)
            .with_empty_message(empty_message)
            .to_string()
    }
}

fn not_found(id: BookId) -> String {
    Rejection(ShelfError::BookNotFound { id }).to_string()
}
