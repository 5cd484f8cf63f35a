//! Terminal surface - Paint a rendered tree, restore the terminal on drop.
//!
//! This is the thin layer between the engine's output tree and a real
//! terminal: raw mode + alternate screen on entry, a full repaint per
//! frame, cleanup on drop (including unwinds). Programs that only need
//! lines of text can skip this module entirely and use
//! [`Rendered::to_lines`](crate::Rendered::to_lines).

use std::io::{self, Write, stdout};

use crossterm::cursor::MoveTo;
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use crate::engine::Rendered;
use crate::types::Style;

// =============================================================================
// Screen
// =============================================================================

/// Raw-mode alternate-screen session.
///
/// Dropping the screen leaves the alternate screen and disables raw mode,
/// so the terminal is restored even when the program unwinds.
pub struct Screen {
    active: bool,
}

impl Screen {
    /// Enter raw mode and the alternate screen.
    pub fn enter() -> io::Result<Screen> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;
        Ok(Screen { active: true })
    }

    /// Clear and repaint the whole screen from a rendered tree.
    pub fn paint(&mut self, rendered: &Rendered) -> io::Result<()> {
        let mut out = stdout();
        queue!(out, Clear(ClearType::All))?;
        for (row, (line, style)) in rendered.to_rows().into_iter().enumerate() {
            queue!(out, MoveTo(0, row as u16))?;
            queue_attributes(&mut out, style)?;
            queue!(out, Print(&line), SetAttribute(Attribute::Reset))?;
        }
        out.flush()
    }

    /// Leave the alternate screen and disable raw mode.
    pub fn leave(mut self) -> io::Result<()> {
        self.restore()
    }

    fn restore(&mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            execute!(stdout(), LeaveAlternateScreen)?;
            terminal::disable_raw_mode()?;
        }
        Ok(())
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        // Best effort; nowhere to report failure from a destructor.
        let _ = self.restore();
    }
}

fn queue_attributes(out: &mut impl Write, style: Style) -> io::Result<()> {
    if style.contains(Style::BOLD) {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.contains(Style::DIM) {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if style.contains(Style::ITALIC) {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.contains(Style::UNDERLINE) {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    Ok(())
}
