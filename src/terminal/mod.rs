//! Terminal lifecycle management.
//!
//! Entering/leaving TUI mode and restoring the terminal after a panic.

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};
