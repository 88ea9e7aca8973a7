//! Column-visibility checklist overlay.
//!
//! A small centered popup listing every column with its visibility state.
//! Hidden columns are omitted from rendering but stay in the data model.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_BORDER};
use crate::app::App;
use crate::projection::Column;

pub fn render_overlay(frame: &mut Frame, screen: Rect, app: &App) {
    let area = centered_rect(26, (Column::ALL.len() + 2) as u16, screen);
    frame.render_widget(Clear, area);

    let lines: Vec<Line> = Column::ALL
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let mark = if app.projection.is_visible(*column) { "x" } else { " " };
            let text = format!("[{}] {} {}", mark, i + 1, column.title());
            let style = if i == app.columns_cursor {
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            Line::from(Span::styled(text, style))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Columns ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn centered_rect(width: u16, height: u16, screen: Rect) -> Rect {
    let width = width.min(screen.width);
    let height = height.min(screen.height);
    Rect::new(
        screen.x + (screen.width.saturating_sub(width)) / 2,
        screen.y + (screen.height.saturating_sub(height)) / 2,
        width,
        height,
    )
}
