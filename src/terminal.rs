use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Leaves the alternate screen, stops mouse capture, shows the cursor and
/// turns raw mode off.
pub fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let screen = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show);
    disable_raw_mode()?;
    screen
}

/// Puts stdout into raw mode on the alternate screen until dropped.
///
/// Restoring on drop covers early `?` returns and panics alike.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal(&mut io::stdout());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_leaves_alternate_screen_and_shows_cursor() {
        let mut out = Vec::new();

        restore_terminal(&mut out).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"), "wrote {written:?}");
        assert!(written.contains("\x1b[?25h"), "wrote {written:?}");
    }
}
