//! Keyboard handling, dispatched by input mode.

use crossterm::event::{KeyCode, KeyEvent};

use super::{App, Mode};
use crate::projection::Column;

impl App {
    /// Route a key press to the handler for the current input mode.
    ///
    /// Ctrl+C is handled globally by the event loop before this is called.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::Filter => self.handle_filter_key(key),
            Mode::Columns => self.handle_columns_key(key),
            Mode::Detail => self.handle_detail_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_previous(),
            KeyCode::Home => self.select_first(),
            KeyCode::End => self.select_last(),
            KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown => self.next_page(),
            KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp => self.previous_page(),
            KeyCode::Char('s') => {
                self.projection.toggle_sort();
                self.clamp_selection();
            }
            KeyCode::Char('r') => self.reload(),
            KeyCode::Char('/') => self.mode = Mode::Filter,
            KeyCode::Char('c') => {
                self.columns_cursor = 0;
                self.mode = Mode::Columns;
            }
            KeyCode::Enter => self.open_detail(),
            _ => {}
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        match key.code {
            // Esc clears the filter entirely, Enter keeps it applied
            KeyCode::Esc => {
                self.projection.filter.clear();
                self.clamp_selection();
                self.mode = Mode::Browse;
            }
            KeyCode::Enter => self.mode = Mode::Browse,
            KeyCode::Backspace => {
                self.projection.filter.pop();
                self.clamp_selection();
            }
            KeyCode::Char(c) => {
                self.projection.filter.push(c);
                self.clamp_selection();
            }
            _ => {}
        }
    }

    fn handle_columns_key(&mut self, key: KeyEvent) {
        let column_count = Column::ALL.len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('q') => self.mode = Mode::Browse,
            KeyCode::Char('j') | KeyCode::Down => {
                if self.columns_cursor + 1 < column_count {
                    self.columns_cursor += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.columns_cursor = self.columns_cursor.saturating_sub(1);
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.projection.toggle_column(Column::ALL[self.columns_cursor]);
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = (c as usize) - ('1' as usize);
                self.projection.toggle_column(Column::ALL[index]);
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => self.close_detail(),
            KeyCode::Char('j') | KeyCode::Down => {
                if let Some(panel) = &mut self.detail {
                    panel.focus_next();
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if let Some(panel) = &mut self.detail {
                    panel.focus_previous();
                }
            }
            KeyCode::Char('r') => self.retry_focused_film(),
            _ => {}
        }
    }
}
