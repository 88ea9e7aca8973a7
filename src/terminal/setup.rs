//! Terminal setup and teardown functions.
//!
//! Low-level functions for entering and leaving TUI mode. Keyboard input is
//! all we capture; mouse capture and bracketed paste stay off.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode.
///
/// Switches to the alternate screen so the user's scrollback is preserved.
/// Raw mode is enabled separately by the caller.
///
/// # Errors
///
/// Returns an error if the terminal command fails.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen)
}

/// Leave TUI mode and restore the terminal to its normal state.
///
/// Safe to call multiple times; errors are ignored because there is nothing
/// useful to do with them during teardown.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen);
    let _ = execute!(writer, Show);
    let _ = writer.flush();
}

/// Restore the terminal to a usable state after a panic or error.
///
/// Aggressive cleanup that ignores all errors.
pub fn emergency_restore() {
    let mut stdout = io::stdout();
    leave_tui_mode(&mut stdout);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_leave_tui_mode_does_not_panic() {
        // Runs against an in-memory writer, not a real terminal
        let mut buffer = Vec::new();
        leave_tui_mode(&mut buffer);
    }

    #[test]
    fn test_enter_tui_mode_surfaces_writer_error() {
        // The caller restores the terminal on this error path
        assert!(enter_tui_mode(&mut FailingWriter).is_err());
    }

    #[test]
    fn test_leave_tui_mode_tolerates_failing_writer() {
        leave_tui_mode(&mut FailingWriter);
    }

    #[test]
    fn test_emergency_restore_does_not_panic() {
        emergency_restore();
    }
}
