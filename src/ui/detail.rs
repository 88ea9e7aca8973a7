//! Detail panel rendering.
//!
//! Shows the selected record's name, its canonical URL, and one line per
//! film slot labeled by its 1-based position in the record's `films`
//! sequence. Slot lines reflect their fetch state: spinner while loading,
//! title when resolved, failure message with a retry hint otherwise.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::helpers::truncate_to_width;
use super::theme::{spinner_frame, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_LOADING, COLOR_READY};
use crate::app::{App, FilmSlotState, Mode};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(panel) = &app.detail else {
        return;
    };
    let inner_width = area.width.saturating_sub(2) as usize;

    let mut lines = vec![
        Line::from(Span::styled(
            panel.person.name.clone(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_to_width(&panel.person.url, inner_width),
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(""),
    ];

    if panel.slots.is_empty() {
        lines.push(Line::from(Span::styled(
            "No film references.",
            Style::default().fg(COLOR_DIM),
        )));
    } else {
        lines.push(Line::from(Span::styled("Films", Style::default().fg(COLOR_DIM))));
        for (i, slot) in panel.slots.iter().enumerate() {
            let focused = app.mode == Mode::Detail && i == panel.focused;
            lines.push(slot_line(app, i, slot, focused, inner_width));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Details ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn slot_line(
    app: &App,
    index: usize,
    slot: &crate::app::FilmSlot,
    focused: bool,
    width: usize,
) -> Line<'static> {
    // 1-based position label, fixed by sequence order
    let prefix = format!("{}) ", index + 1);

    let (text, style) = match &slot.state {
        FilmSlotState::Loading => (
            format!("{}{} fetching\u{2026}", prefix, spinner_frame(app.tick_count)),
            Style::default().fg(COLOR_LOADING),
        ),
        FilmSlotState::Ready(title) => (
            truncate_to_width(&format!("{}{}", prefix, title), width),
            Style::default().fg(COLOR_READY),
        ),
        FilmSlotState::Failed(message) => {
            let hint = if focused { " (r to retry)" } else { "" };
            (
                truncate_to_width(&format!("{}failed: {}{}", prefix, message, hint), width),
                Style::default().fg(COLOR_ERROR),
            )
        }
    };

    let style = if focused {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    };
    Line::from(Span::styled(text, style))
}
