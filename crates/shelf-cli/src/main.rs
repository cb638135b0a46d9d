//! Shelf CLI Application
//!
//! Interactive command-line front end for the shelf library tracker. The
//! catalog lives for one session; commands are read from standard input.

mod args;
mod cli;
mod display;
mod renderer;
mod session;

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use log::info;
use renderer::TerminalRenderer;
use session::Session;
use shelf_core::{CatalogBuilder, LoggingObserver};

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        no_color,
        empty,
        time_zone,
    } = Args::parse();

    let mut builder = CatalogBuilder::new().with_sample_books(!empty);
    if let Some(name) = time_zone.as_deref() {
        builder = builder
            .with_time_zone_name(name)
            .context("Failed to configure time zone")?;
    }
    let mut catalog = builder.build();
    catalog.subscribe(Box::new(LoggingObserver));

    let renderer = TerminalRenderer::new(!no_color);
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    info!("Shelf started with {} books", catalog.len());
    if interactive {
        renderer
            .render("Type `help` for the list of commands.\n")
            .context("Failed to write output")?;
    }

    Session::new(catalog)
        .run(stdin.lock(), &renderer, interactive)
        .context("Session failed")?;

    info!("Shelf session ended");
    Ok(())
}
