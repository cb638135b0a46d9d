//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use std::io::{self, Write};

use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        if self.rich_enabled {
            // Headers keep their hash marks; termimad would strip them
            for line in markdown.lines() {
                if line.starts_with('#') {
                    writeln!(stdout, "\x1b[34m{line}\x1b[0m")?;
                } else {
                    writeln!(stdout, "{}", self.skin.inline(line))?;
                }
            }
        } else {
            write!(stdout, "{markdown}")?;
        }
        stdout.flush()
    }

    /// Print the interactive prompt without a trailing newline
    pub fn prompt(&self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        if self.rich_enabled {
            write!(stdout, "\x1b[32mshelf>\x1b[0m ")?;
        } else {
            write!(stdout, "shelf> ")?;
        }
        stdout.flush()
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_rich_renderer() {
        let renderer = TerminalRenderer::new(true);
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
