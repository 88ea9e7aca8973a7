//! Color constants for the UI.
//!
//! Minimal dark palette; the terminal's own colors do most of the work.

use ratatui::style::Color;

/// Border color for panels
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and the selected row
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for secondary info (URLs, hints)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Error text
pub const COLOR_ERROR: Color = Color::Red;

/// In-flight fetches (spinner, loading placeholders)
pub const COLOR_LOADING: Color = Color::Yellow;

/// Resolved film titles
pub const COLOR_READY: Color = Color::LightGreen;

/// Spinner animation frames.
pub const SPINNER_FRAMES: [&str; 4] = ["\u{280b}", "\u{2819}", "\u{2838}", "\u{28b0}"];

/// Pick the spinner frame for an animation tick.
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}
