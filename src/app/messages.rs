//! Messages delivered from fetch tasks back to the app.

use crate::models::{Film, PeoplePage};

/// Result of an asynchronous fetch, delivered through the app's mpsc channel.
///
/// Errors travel as display strings: the app only renders them, and strings
/// keep the message type cheaply cloneable for tests.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A list fetch resolved.
    ///
    /// `seq` is the fetch's sequence number; the app applies the result only
    /// if it is still the latest issued, discarding stale responses.
    PageLoaded {
        seq: u64,
        result: Result<PeoplePage, String>,
    },
    /// A film fetch resolved.
    FilmLoaded {
        url: String,
        result: Result<Film, String>,
    },
}
