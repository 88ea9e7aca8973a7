//! Client-side film cache.
//!
//! Films are immutable upstream, so refetching one every time a detail panel
//! opens is pure waste. The cache is keyed by film URL and owned by the app.
//!
//! Eviction policy: entries expire after a TTL (default 5 minutes), and the
//! cache holds at most a fixed number of entries, evicting the oldest
//! insertion when full. Expired entries are skipped on lookup and purged on
//! the next insert.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use crate::models::Film;

/// Default time-to-live for a cached film.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Default maximum number of cached films.
pub const DEFAULT_CAPACITY: usize = 256;

#[derive(Debug, Clone)]
struct CacheEntry {
    film: Film,
    inserted_at: Instant,
}

/// URL-keyed cache of fetched films with TTL and capacity bounds.
#[derive(Debug)]
pub struct FilmCache {
    ttl: Duration,
    capacity: usize,
    entries: HashMap<String, CacheEntry>,
    /// Insertion order, oldest first, for capacity eviction
    insertion_order: VecDeque<String>,
}

impl FilmCache {
    /// Create a cache with the default TTL and capacity.
    pub fn new() -> Self {
        Self::with_policy(DEFAULT_TTL, DEFAULT_CAPACITY)
    }

    /// Create a cache with an explicit TTL and capacity.
    pub fn with_policy(ttl: Duration, capacity: usize) -> Self {
        Self {
            ttl,
            capacity: capacity.max(1),
            entries: HashMap::new(),
            insertion_order: VecDeque::new(),
        }
    }

    /// Look up a film by URL. Expired entries count as absent.
    pub fn get(&self, url: &str) -> Option<&Film> {
        let entry = self.entries.get(url)?;
        if entry.inserted_at.elapsed() > self.ttl {
            return None;
        }
        Some(&entry.film)
    }

    /// Insert a film, evicting expired entries first and then the oldest
    /// insertion if the cache is still at capacity.
    pub fn insert(&mut self, url: String, film: Film) {
        self.purge_expired();

        if !self.entries.contains_key(&url) && self.entries.len() >= self.capacity {
            if let Some(oldest) = self.insertion_order.pop_front() {
                self.entries.remove(&oldest);
            }
        }

        if self.entries.contains_key(&url) {
            self.insertion_order.retain(|u| u != &url);
        }
        self.insertion_order.push_back(url.clone());
        self.entries.insert(
            url,
            CacheEntry {
                film,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Number of live (possibly expired but not yet purged) entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn purge_expired(&mut self) {
        let ttl = self.ttl;
        self.entries.retain(|_, entry| entry.inserted_at.elapsed() <= ttl);
        let entries = &self.entries;
        self.insertion_order.retain(|url| entries.contains_key(url));
    }
}

impl Default for FilmCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film(title: &str) -> Film {
        Film {
            title: title.to_string(),
            episode_id: 0,
        }
    }

    #[test]
    fn test_get_returns_inserted_film() {
        let mut cache = FilmCache::new();
        cache.insert("http://api/films/1/".to_string(), film("A New Hope"));

        assert_eq!(cache.get("http://api/films/1/").unwrap().title, "A New Hope");
        assert!(cache.get("http://api/films/2/").is_none());
    }

    #[test]
    fn test_capacity_evicts_oldest_insertion() {
        let mut cache = FilmCache::with_policy(DEFAULT_TTL, 2);
        cache.insert("a".to_string(), film("A"));
        cache.insert("b".to_string(), film("B"));
        cache.insert("c".to_string(), film("C"));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn test_reinsert_refreshes_insertion_order() {
        let mut cache = FilmCache::with_policy(DEFAULT_TTL, 2);
        cache.insert("a".to_string(), film("A"));
        cache.insert("b".to_string(), film("B"));
        // Re-inserting "a" makes "b" the oldest
        cache.insert("a".to_string(), film("A2"));
        cache.insert("c".to_string(), film("C"));

        assert!(cache.get("b").is_none());
        assert_eq!(cache.get("a").unwrap().title, "A2");
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn test_expired_entry_counts_as_absent() {
        let mut cache = FilmCache::with_policy(Duration::from_millis(10), 8);
        cache.insert("a".to_string(), film("A"));

        std::thread::sleep(Duration::from_millis(20));
        assert!(cache.get("a").is_none());

        // Insert purges the expired entry
        cache.insert("b".to_string(), film("B"));
        assert_eq!(cache.len(), 1);
    }
}
