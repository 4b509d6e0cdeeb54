//! Renderer trait - the output seam
//!
//! The render actor speaks to the terminal only through this trait, so core
//! logic stays decoupled from crossterm and the render rules can be tested
//! against a recording implementation instead of a TTY.

use std::io;

/// The single-line terminal surface a progress session draws on.
pub trait Renderer: Send {
    /// Overwrite the live line: clear it, return to column 0, write `line`
    /// with no trailing newline.
    fn draw(&mut self, line: &str) -> io::Result<()>;

    /// Print `line` as a completed scrollback line above the live line:
    /// clear the live line, write the text plus a line terminator.
    fn scrollback(&mut self, line: &str) -> io::Result<()>;

    /// Write the final line, terminate it, and release the terminal.
    fn finish(&mut self, line: &str) -> io::Result<()>;
}
