//! Application state and orchestration.
//!
//! [`App`] owns the page-state machine, the table projection, the detail
//! panel, and the film cache. Fetches run on tokio tasks and report back
//! through an mpsc channel consumed by the event loop; the app never blocks
//! on the network.
//!
//! The page-state machine is the one real state machine here:
//!
//! ```text
//! Idle -> Loading -> { Ready(page), Failed }
//! ```
//!
//! `Ready` loops back to `Loading` on navigation; `Failed` recovers through
//! any fresh navigation or an explicit reload. `Loading` and `Failed` carry
//! the previous page when one exists so the table can stay on screen while
//! state changes underneath it.

mod detail;
mod handlers;
mod messages;
mod navigation;

pub use detail::{DetailPanel, FilmSlot, FilmSlotState};
pub use messages::AppMessage;

use tokio::sync::mpsc;
use tracing::debug;

use crate::api::SwapiClient;
use crate::cache::FilmCache;
use crate::config::Config;
use crate::models::{PeoplePage, Person};
use crate::projection::{page_count, Projection};

/// Which input surface currently receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Table navigation
    #[default]
    Browse,
    /// Editing the name filter
    Filter,
    /// Column-visibility checklist overlay
    Columns,
    /// Detail panel open for the selected record
    Detail,
}

/// Renderable state of the current page.
///
/// Exactly one variant describes the view at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    /// No fetch has been issued yet
    Idle,
    /// A fetch is in flight
    Loading {
        /// The page that was on screen when the fetch started, if any
        previous: Option<PeoplePage>,
    },
    /// The most recent fetch succeeded
    Ready(PeoplePage),
    /// The most recent fetch failed
    Failed {
        /// Human-readable failure description
        message: String,
        /// Stale-but-present page from before the failure, if any
        previous: Option<PeoplePage>,
    },
}

/// Top-level application state.
pub struct App {
    pub config: Config,
    client: SwapiClient,
    /// Current input mode
    pub mode: Mode,
    /// Page-state machine
    pub page_state: PageState,
    /// URL of the most recently *intended* fetch, for reload/retry
    current_url: String,
    /// 1-based number of the most recently intended page
    current_page_number: u64,
    /// 1-based number of the page currently backing the view. Lags
    /// `current_page_number` while a fetch is in flight or failed, so that
    /// navigation issued against a stale page stays consistent with it
    pub(crate) renderable_page_number: u64,
    /// Next fetch sequence number to issue
    next_seq: u64,
    /// Sequence number of the latest issued fetch still unresolved
    latest_seq: Option<u64>,
    /// Selected row index into the projected row set
    pub selected: usize,
    /// Sort / filter / column-visibility state
    pub projection: Projection,
    /// Open detail panel, if any
    pub detail: Option<DetailPanel>,
    /// Cursor position inside the column checklist overlay
    pub columns_cursor: usize,
    film_cache: FilmCache,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver half of the result channel; the event loop takes ownership
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Dirty flag: redraw on the next loop iteration
    pub needs_redraw: bool,
    /// Monotonic tick counter for spinner animation
    pub tick_count: u64,
    pub should_quit: bool,
}

impl App {
    /// Create an app over the given config and API client.
    pub fn new(config: Config, client: SwapiClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let film_cache = FilmCache::with_policy(config.film_cache_ttl, config.film_cache_capacity);
        let endpoint = config.endpoint.clone();

        Self {
            config,
            client,
            mode: Mode::default(),
            page_state: PageState::Idle,
            current_url: endpoint,
            current_page_number: 1,
            renderable_page_number: 1,
            next_seq: 0,
            latest_seq: None,
            selected: 0,
            projection: Projection::new(),
            detail: None,
            columns_cursor: 0,
            film_cache,
            message_tx,
            message_rx: Some(message_rx),
            needs_redraw: true,
            tick_count: 0,
            should_quit: false,
        }
    }

    /// Issue the initial fetch for the configured endpoint.
    pub fn initialize(&mut self) {
        let url = self.config.endpoint.clone();
        self.start_fetch(url, 1);
    }

    // ------------------------------------------------------------------
    // Page state accessors
    // ------------------------------------------------------------------

    /// The renderable page: the current one, or the stale one carried
    /// through `Loading`/`Failed`.
    pub fn page(&self) -> Option<&PeoplePage> {
        match &self.page_state {
            PageState::Idle => None,
            PageState::Loading { previous } => previous.as_ref(),
            PageState::Ready(page) => Some(page),
            PageState::Failed { previous, .. } => previous.as_ref(),
        }
    }

    /// Whether a list fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.page_state, PageState::Loading { .. })
    }

    /// The current failure message, if the last fetch failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.page_state {
            PageState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Sequence number of the latest unresolved fetch.
    pub fn latest_seq(&self) -> Option<u64> {
        self.latest_seq
    }

    /// 1-based number of the most recently intended page.
    pub fn current_page_number(&self) -> u64 {
        self.current_page_number
    }

    /// URL of the most recently intended fetch.
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Total page count from the server's record count and the fixed page
    /// size carried in config.
    pub fn total_pages(&self) -> u64 {
        self.page()
            .map(|p| page_count(p.count, self.config.page_size))
            .unwrap_or(0)
    }

    // ------------------------------------------------------------------
    // Row selection
    // ------------------------------------------------------------------

    /// The projected rows of the renderable page.
    pub fn projected_rows(&self) -> Vec<&Person> {
        self.page()
            .map(|p| self.projection.project(&p.results))
            .unwrap_or_default()
    }

    /// The currently selected record, if any row is selected.
    pub fn selected_person(&self) -> Option<&Person> {
        self.projected_rows().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.projected_rows().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.projected_rows().len().saturating_sub(1);
    }

    /// Keep the selection inside the projected row set after the rows
    /// changed (new page, filter edit).
    pub(crate) fn clamp_selection(&mut self) {
        let len = self.projected_rows().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    // ------------------------------------------------------------------
    // Detail panel
    // ------------------------------------------------------------------

    /// Open the detail panel for the selected record.
    ///
    /// Film slots resolve from the cache immediately where possible; the
    /// rest fetch concurrently. Display order is fixed by sequence position,
    /// never by completion order.
    pub fn open_detail(&mut self) {
        let Some(person) = self.selected_person().cloned() else {
            return;
        };

        let mut panel = DetailPanel::new(person);
        let mut to_fetch = Vec::new();
        for slot in &mut panel.slots {
            if let Some(film) = self.film_cache.get(&slot.url) {
                slot.state = FilmSlotState::Ready(film.title.clone());
            } else {
                to_fetch.push(slot.url.clone());
            }
        }

        self.detail = Some(panel);
        self.mode = Mode::Detail;
        for url in to_fetch {
            self.spawn_film_fetch(url);
        }
        self.mark_dirty();
    }

    /// Close the detail panel. Slot state is discarded; cached films are not.
    pub fn close_detail(&mut self) {
        self.detail = None;
        self.mode = Mode::Browse;
        self.mark_dirty();
    }

    /// Re-issue the fetch for the focused film slot if it failed.
    pub fn retry_focused_film(&mut self) {
        let Some(panel) = &mut self.detail else {
            return;
        };
        let Some(slot) = panel.slots.get_mut(panel.focused) else {
            return;
        };
        if !matches!(slot.state, FilmSlotState::Failed(_)) {
            return;
        }

        slot.state = FilmSlotState::Loading;
        let url = slot.url.clone();
        self.spawn_film_fetch(url);
        self.mark_dirty();
    }

    /// Whether any film slot of the open panel is still loading.
    pub fn has_loading_films(&self) -> bool {
        self.detail
            .as_ref()
            .is_some_and(|panel| panel.slots.iter().any(|s| matches!(s.state, FilmSlotState::Loading)))
    }

    /// Number of films currently cached (test and status hook).
    pub fn cached_film_count(&self) -> usize {
        self.film_cache.len()
    }

    fn spawn_film_fetch(&self, url: String) {
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        debug!(%url, "fetching film");
        tokio::spawn(async move {
            let result = client.fetch_film(&url).await.map_err(|e| e.to_string());
            let _ = tx.send(AppMessage::FilmLoaded { url, result });
        });
    }

    // ------------------------------------------------------------------
    // Message handling
    // ------------------------------------------------------------------

    /// Apply a fetch result delivered through the message channel.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::PageLoaded { seq, result } => self.apply_page_result(seq, result),
            AppMessage::FilmLoaded { url, result } => {
                if let Ok(film) = &result {
                    self.film_cache.insert(url.clone(), film.clone());
                }
                if let Some(panel) = &mut self.detail {
                    panel.resolve(&url, result);
                }
                self.mark_dirty();
            }
        }
    }

    // ------------------------------------------------------------------
    // Event loop hooks
    // ------------------------------------------------------------------

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation tick; spinners redraw while anything loads.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_loading() || self.has_loading_films() {
            self.needs_redraw = true;
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub(crate) fn client(&self) -> &SwapiClient {
        &self.client
    }

    pub(crate) fn message_tx(&self) -> &mpsc::UnboundedSender<AppMessage> {
        &self.message_tx
    }

    pub(crate) fn issue_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.latest_seq = Some(seq);
        seq
    }

    pub(crate) fn set_target(&mut self, url: String, page_number: u64) {
        self.current_url = url;
        self.current_page_number = page_number;
    }

    pub(crate) fn clear_latest_seq(&mut self) {
        self.latest_seq = None;
    }
}
