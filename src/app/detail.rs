//! Detail panel state for one selected record.
//!
//! The panel shows the record's name, its canonical URL, and one slot per
//! film URL. Slots fetch independently and resolve in any order, but their
//! display position is fixed by their place in the record's `films`
//! sequence. Failures are per-slot and retryable; nothing fails invisibly.

use crate::models::{Film, Person};

/// State of a single film slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilmSlotState {
    /// Fetch in flight (or queued)
    Loading,
    /// Fetch succeeded; holds the film title
    Ready(String),
    /// Fetch failed; holds the failure description
    Failed(String),
}

/// One film reference inside the detail panel.
#[derive(Debug, Clone)]
pub struct FilmSlot {
    /// Canonical film URL from the record's `films` sequence
    pub url: String,
    pub state: FilmSlotState,
}

/// Detail panel over one person record.
#[derive(Debug, Clone)]
pub struct DetailPanel {
    pub person: Person,
    /// One slot per `films` entry, in sequence order
    pub slots: Vec<FilmSlot>,
    /// Focused slot index for retry navigation
    pub focused: usize,
}

impl DetailPanel {
    /// Build a panel with every slot in the loading state.
    pub fn new(person: Person) -> Self {
        let slots = person
            .films
            .iter()
            .map(|url| FilmSlot {
                url: url.clone(),
                state: FilmSlotState::Loading,
            })
            .collect();
        Self {
            person,
            slots,
            focused: 0,
        }
    }

    /// Resolve every still-loading slot that references `url`.
    ///
    /// A record can list the same film URL more than once; all matching
    /// slots resolve together. Slots already resolved are left alone.
    pub fn resolve(&mut self, url: &str, result: Result<Film, String>) {
        for slot in &mut self.slots {
            if slot.url == url && slot.state == FilmSlotState::Loading {
                slot.state = match &result {
                    Ok(film) => FilmSlotState::Ready(film.title.clone()),
                    Err(message) => FilmSlotState::Failed(message.clone()),
                };
            }
        }
    }

    pub fn focus_next(&mut self) {
        if !self.slots.is_empty() && self.focused + 1 < self.slots.len() {
            self.focused += 1;
        }
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }
}
