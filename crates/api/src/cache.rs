// Copyright (C) 2026 SIPELITA Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time-boxed read cache.
//!
//! A read-through cache keyed by request signature with a fixed freshness
//! window, checked on read. Owned by the client that created it, never
//! shared process-wide. Mutation paths bypass it entirely; the dashboard
//! snapshot is always refetched whole.

use std::collections::HashMap;
use std::time::{Duration, Instant};

struct CacheEntry<T> {
    value: T,
    inserted_at: Instant,
}

/// A read cache with a fixed freshness window.
pub struct ResponseCache<T> {
    entries: HashMap<String, CacheEntry<T>>,
    freshness_window: Duration,
}

impl<T> ResponseCache<T> {
    /// Freshness window used by the listing read paths.
    pub const DEFAULT_WINDOW: Duration = Duration::from_secs(5 * 60);

    /// Creates a cache with the default freshness window.
    #[must_use]
    pub fn new() -> Self {
        Self::with_window(Self::DEFAULT_WINDOW)
    }

    /// Creates a cache with a custom freshness window.
    #[must_use]
    pub fn with_window(freshness_window: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            freshness_window,
        }
    }

    /// Returns the cached value for `key` if it is still fresh.
    ///
    /// Expiry is checked on read; stale entries are treated as absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&T> {
        let entry = self.entries.get(key)?;
        if entry.inserted_at.elapsed() < self.freshness_window {
            Some(&entry.value)
        } else {
            None
        }
    }

    /// Stores a value under `key`, resetting its freshness.
    pub fn insert(&mut self, key: impl Into<String>, value: T) {
        self.entries.insert(
            key.into(),
            CacheEntry {
                value,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Drops an entry, forcing the next read through to the backend.
    pub fn invalidate(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

impl<T> Default for ResponseCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
