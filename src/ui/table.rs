//! The people table.
//!
//! Renders the projected (filtered, sorted, column-toggled) rows of the
//! current page. Pagination is server-driven, so every row of the page is
//! shown; there is no client-side paging.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::theme::{spinner_frame, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_LOADING};
use crate::app::App;
use crate::projection::{Column, SortDirection};

/// Render the table area: the table itself, or a loading/failure notice
/// when there is no page to show.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    if app.page().is_some() {
        render_table(frame, area, app);
    } else if app.is_loading() {
        render_notice(
            frame,
            area,
            Line::from(format!("{} Loading\u{2026}", spinner_frame(app.tick_count))),
            Style::default().fg(COLOR_LOADING),
        );
    } else if let Some(message) = app.error_message() {
        render_notice(
            frame,
            area,
            Line::from(format!("Failed to load: {} (r to retry)", message)),
            Style::default().fg(COLOR_ERROR),
        );
    } else {
        render_notice(frame, area, Line::from(""), Style::default());
    }
}

fn render_table(frame: &mut Frame, area: Rect, app: &App) {
    let Some(page) = app.page() else {
        return;
    };
    let columns = app.projection.visible_columns();
    let rows = app.projection.project(&page.results);

    let header = Row::new(
        columns
            .iter()
            .map(|c| Cell::from(header_title(*c, app)))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let body: Vec<Row> = if rows.is_empty() {
        vec![Row::new(vec![Cell::from("No results.")])
            .style(Style::default().fg(COLOR_DIM))]
    } else {
        rows.iter()
            .map(|person| {
                Row::new(
                    columns
                        .iter()
                        .map(|c| Cell::from(c.value(person).to_string()))
                        .collect::<Vec<_>>(),
                )
            })
            .collect()
    };

    let widths: Vec<Constraint> = columns.iter().map(|c| column_width(*c)).collect();

    let table = Table::new(body, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER))
                .title(" People "),
        )
        .column_spacing(1)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    if !rows.is_empty() {
        state.select(Some(app.selected));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

fn header_title(column: Column, app: &App) -> String {
    if column == Column::Name {
        match app.projection.sort {
            Some(SortDirection::Ascending) => return format!("{} \u{25b2}", column.title()),
            Some(SortDirection::Descending) => return format!("{} \u{25bc}", column.title()),
            None => {}
        }
    }
    column.title().to_string()
}

fn column_width(column: Column) -> Constraint {
    match column {
        Column::Height => Constraint::Length(8),
        Column::Name => Constraint::Min(16),
        Column::Mass => Constraint::Length(8),
        Column::Gender => Constraint::Length(14),
        Column::HairColor => Constraint::Length(12),
    }
}

fn render_notice(frame: &mut Frame, area: Rect, line: Line, style: Style) {
    let notice = Paragraph::new(line)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER))
                .title(" People "),
        );
    frame.render_widget(notice, area);
}
