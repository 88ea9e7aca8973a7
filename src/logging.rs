//! File-backed tracing setup.
//!
//! The TUI owns stdout, so log output goes to a file under the user's cache
//! directory. Filtering follows `RUST_LOG` when set, defaulting to `info`.
//! Initialization failure is not fatal; the app simply runs without logs.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Path of the log file, if a cache directory can be determined.
pub fn log_file_path() -> Option<PathBuf> {
    let mut path = dirs::cache_dir()?;
    path.push("holodex");
    path.push("holodex.log");
    Some(path)
}

/// Install the global tracing subscriber writing to the log file.
///
/// Returns `false` when the log directory or file could not be set up, or
/// when a subscriber was already installed.
pub fn init() -> bool {
    let Some(path) = log_file_path() else {
        return false;
    };
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return false;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return false;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path_ends_with_log_name() {
        if let Some(path) = log_file_path() {
            assert!(path.ends_with("holodex/holodex.log"));
        }
    }
}
