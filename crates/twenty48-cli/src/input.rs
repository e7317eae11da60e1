//! Raw-mode keyboard capture: one input symbol per call.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal;
use twenty48_core::engine::Move;

/// Keeps the terminal in raw mode for its lifetime and restores it on
/// drop, including on early exit through `?`.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Block until the next character keypress and return it. Non-character
/// events (resize, arrows, releases) are skipped.
pub fn next_symbol() -> io::Result<char> {
    loop {
        if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
            if !matches!(kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                continue;
            }
            if let KeyCode::Char(c) = code {
                return Ok(c);
            }
        }
    }
}

/// What a single input symbol asks the driver to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Slide(Move),
    Restart,
    Quit,
}

/// Symbol-to-command mapping, case-sensitive. Unrecognized symbols map
/// to `None` and are ignored by the driver.
pub fn command_for(symbol: char) -> Option<Command> {
    match symbol {
        'h' => Some(Command::Slide(Move::Left)),
        'j' => Some(Command::Slide(Move::Down)),
        'k' => Some(Command::Slide(Move::Up)),
        'l' => Some(Command::Slide(Move::Right)),
        'R' => Some(Command::Restart),
        'Q' => Some(Command::Quit),
        _ => None,
    }
}
