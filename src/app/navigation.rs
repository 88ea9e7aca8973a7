//! Page navigation and the sequence-guarded fetch cycle.
//!
//! Every list fetch carries a monotonically increasing sequence number.
//! Overlapping fetches are allowed (navigating while loading issues a new
//! one), but a response is applied only when its sequence number matches the
//! latest issued, so the view always shows the result of the most recently
//! *intended* navigation rather than whichever response happened to resolve
//! last.

use tracing::{debug, warn};

use super::{App, AppMessage, PageState};
use crate::models::PeoplePage;

impl App {
    /// Navigate to the next page. No-op when the renderable page has no
    /// `next` link.
    ///
    /// Both the link and the target number come from the *renderable* page.
    /// While a fetch is in flight the renderable page is the stale one, so a
    /// repeated press re-requests the same target rather than claiming a
    /// page whose link was never seen.
    pub fn next_page(&mut self) {
        let Some(url) = self.page().and_then(|p| p.next.clone()) else {
            return;
        };
        let target = self.renderable_page_number + 1;
        self.start_fetch(url, target);
    }

    /// Navigate to the previous page. No-op when the renderable page has no
    /// `previous` link.
    pub fn previous_page(&mut self) {
        let Some(url) = self.page().and_then(|p| p.previous.clone()) else {
            return;
        };
        let target = self.renderable_page_number.saturating_sub(1).max(1);
        self.start_fetch(url, target);
    }

    /// Re-fetch the most recently intended page. This doubles as the retry
    /// affordance from the failure state.
    pub fn reload(&mut self) {
        let url = self.current_url().to_string();
        let target = self.current_page_number();
        self.start_fetch(url, target);
    }

    /// Begin a fetch cycle: record the intended target, move to `Loading`
    /// (carrying the page currently on screen), and spawn the fetch task.
    pub(crate) fn start_fetch(&mut self, url: String, page_number: u64) {
        let seq = self.issue_seq();
        self.set_target(url.clone(), page_number);

        let previous = self.take_renderable_page();
        self.page_state = PageState::Loading { previous };
        self.mark_dirty();

        let client = self.client().clone();
        let tx = self.message_tx().clone();
        debug!(seq, %url, "fetching page");
        tokio::spawn(async move {
            let result = client.fetch_page(&url).await.map_err(|e| e.to_string());
            let _ = tx.send(AppMessage::PageLoaded { seq, result });
        });
    }

    /// Apply a resolved list fetch, discarding it if a newer fetch has been
    /// issued since.
    pub(crate) fn apply_page_result(&mut self, seq: u64, result: Result<PeoplePage, String>) {
        if self.latest_seq() != Some(seq) {
            debug!(seq, latest = ?self.latest_seq(), "discarding stale page response");
            return;
        }
        self.clear_latest_seq();

        match result {
            Ok(page) => {
                debug!(count = page.count, results = page.results.len(), "page applied");
                self.page_state = PageState::Ready(page);
                // The applied fetch is the latest intent, so its number now
                // backs the view
                self.renderable_page_number = self.current_page_number();
                self.clamp_selection();
            }
            Err(message) => {
                warn!(%message, "page fetch failed");
                let previous = self.take_renderable_page();
                self.page_state = PageState::Failed { message, previous };
            }
        }
        self.mark_dirty();
    }

    /// Take the page currently backing the view, leaving the state machine
    /// about to transition.
    fn take_renderable_page(&mut self) -> Option<PeoplePage> {
        match std::mem::replace(&mut self.page_state, PageState::Idle) {
            PageState::Idle => None,
            PageState::Loading { previous } => previous,
            PageState::Ready(page) => Some(page),
            PageState::Failed { previous, .. } => previous,
        }
    }
}
