//! Terminal renderer - the crossterm-backed live-line primitive
//!
//! Commands are queued and flushed as a unit so every draw lands atomically.
//! Write errors are swallowed at this boundary: a progress display must not
//! take the host process down because stdout went away. No TTY detection is
//! attempted; on a non-terminal stream the escape sequences are written
//! anyway.

use crossterm::{
    QueueableCommand, cursor,
    terminal::{Clear, ClearType},
};
use std::io::{self, Stdout, Write, stdout};

use crate::renderer::Renderer;

/// [`Renderer`] over the real terminal.
///
/// The cursor is hidden while a live line is on screen (it would otherwise
/// blink at the end of the bar) and shown again by [`Renderer::finish`] or on
/// drop.
#[derive(Debug)]
pub struct TermRenderer {
    stdout: Stdout,
    cursor_hidden: bool,
}

impl TermRenderer {
    /// Create a renderer over the given stdout handle.
    pub fn new(stdout: Stdout) -> Self {
        Self {
            stdout,
            cursor_hidden: false,
        }
    }

    /// Clear the current line and park the cursor at column 0.
    fn rewind(&mut self) -> io::Result<()> {
        self.stdout.queue(cursor::MoveToColumn(0))?;
        self.stdout.queue(Clear(ClearType::CurrentLine))?;
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        if !self.cursor_hidden {
            self.stdout.queue(cursor::Hide)?;
            self.cursor_hidden = true;
        }
        Ok(())
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        if self.cursor_hidden {
            self.stdout.queue(cursor::Show)?;
            self.cursor_hidden = false;
        }
        Ok(())
    }
}

impl Default for TermRenderer {
    fn default() -> Self {
        Self::new(stdout())
    }
}

impl Renderer for TermRenderer {
    fn draw(&mut self, line: &str) -> io::Result<()> {
        self.hide_cursor()?;
        self.rewind()?;
        write!(self.stdout, "{line}")?;
        self.stdout.flush()
    }

    fn scrollback(&mut self, line: &str) -> io::Result<()> {
        self.rewind()?;
        writeln!(self.stdout, "{line}")?;
        self.stdout.flush()
    }

    fn finish(&mut self, line: &str) -> io::Result<()> {
        self.rewind()?;
        writeln!(self.stdout, "{line}")?;
        self.show_cursor()?;
        self.stdout.flush()
    }
}

impl Drop for TermRenderer {
    fn drop(&mut self) {
        // Leave the terminal with a visible cursor even if the session never
        // reached finish().
        let _ = self.show_cursor();
        let _ = self.stdout.flush();
    }
}
