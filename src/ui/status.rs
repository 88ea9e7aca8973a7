//! Status bar: load/error state, page position, and key hints.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    Frame,
};

use super::theme::{spinner_frame, COLOR_DIM, COLOR_ERROR, COLOR_LOADING};
use crate::app::{App, Mode};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(hints(app.mode).len() as u16)])
        .split(area);

    frame.render_widget(state_line(app), chunks[0]);
    frame.render_widget(
        Line::from(Span::styled(hints(app.mode), Style::default().fg(COLOR_DIM))),
        chunks[1],
    );
}

fn state_line(app: &App) -> Line<'static> {
    if app.is_loading() {
        return Line::from(Span::styled(
            format!(
                "{} loading page {}\u{2026}",
                spinner_frame(app.tick_count),
                app.current_page_number()
            ),
            Style::default().fg(COLOR_LOADING),
        ));
    }
    if let Some(message) = app.error_message() {
        return Line::from(Span::styled(
            format!("error: {} \u{2014} r to retry", message),
            Style::default().fg(COLOR_ERROR),
        ));
    }
    if let Some(page) = app.page() {
        let total = app.total_pages().max(1);
        return Line::from(format!(
            "page {} of {} \u{b7} {} records",
            app.current_page_number(),
            total,
            page.count
        ));
    }
    Line::from("")
}

fn hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Browse => "j/k select  n/p page  s sort  / filter  c columns  enter details  q quit",
        Mode::Filter => "type to filter  enter apply  esc clear",
        Mode::Columns => "j/k move  space toggle  1-5 direct  esc close",
        Mode::Detail => "j/k focus  r retry  esc close",
    }
}
