//! UI rendering.
//!
//! Layout, top to bottom:
//! - title bar with the active filter and sort indicator
//! - body: the people table, splitting horizontally with the detail panel
//!   when one is open
//! - status bar with page position, load/error state, and key hints
//!
//! The column-visibility checklist renders last as a centered overlay so it
//! layers above everything else.

mod columns;
mod detail;
mod helpers;
mod status;
mod table;
mod theme;

pub use helpers::truncate_to_width;
pub use theme::*;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::app::{App, Mode};
use crate::projection::SortDirection;

/// Render the whole UI for one frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title / filter bar
            Constraint::Min(3),    // Table (and detail panel)
            Constraint::Length(1), // Status bar
        ])
        .split(size);

    render_title_bar(frame, chunks[0], app);

    if app.detail.is_some() {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);
        table::render(frame, body[0], app);
        detail::render(frame, body[1], app);
    } else {
        table::render(frame, chunks[1], app);
    }

    status::render(frame, chunks[2], app);

    if app.mode == Mode::Columns {
        columns::render_overlay(frame, size, app);
    }
}

fn render_title_bar(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let mut spans = vec![
        Span::styled("holodex", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
    ];

    match app.projection.sort {
        Some(SortDirection::Ascending) => {
            spans.push(Span::styled("name \u{25b2}", Style::default().fg(COLOR_ACCENT)));
            spans.push(Span::raw("  "));
        }
        Some(SortDirection::Descending) => {
            spans.push(Span::styled("name \u{25bc}", Style::default().fg(COLOR_ACCENT)));
            spans.push(Span::raw("  "));
        }
        None => {}
    }

    if app.mode == Mode::Filter || !app.projection.filter.is_empty() {
        spans.push(Span::styled("/", Style::default().fg(COLOR_DIM)));
        spans.push(Span::raw(app.projection.filter.clone()));
        if app.mode == Mode::Filter {
            // Block cursor while editing
            spans.push(Span::styled("\u{2588}", Style::default().fg(COLOR_ACCENT)));
        }
    }

    frame.render_widget(Line::from(spans), area);
}
