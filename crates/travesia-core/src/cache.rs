//! Explicitly owned cache of fetched package snapshots.
//!
//! Replaces the module-level response caches of the previous console: the
//! cache is an owned object handed to whoever fetches packages, bounded by a
//! TTL, and invalidated explicitly after any mutation. A successfully
//! applied patch makes the cached copy stale, so callers must call
//! [`FetchCache::invalidate`] for that package id after every submit that
//! the backend accepted.

use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::model::PackageSnapshot;

struct CacheSlot {
    snapshot: PackageSnapshot,
    stored_at: Instant,
}

/// TTL-bound snapshot cache keyed by package id.
pub struct FetchCache {
    ttl: Duration,
    slots: HashMap<i64, CacheSlot>,
}

impl FetchCache {
    /// Create a cache whose entries expire `ttl` after insertion.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slots: HashMap::new(),
        }
    }

    /// Store a fetched snapshot.
    pub fn put(&mut self, package_id: i64, snapshot: PackageSnapshot) {
        self.slots.insert(
            package_id,
            CacheSlot {
                snapshot,
                stored_at: Instant::now(),
            },
        );
    }

    /// Look up a snapshot, evicting it first if its TTL elapsed.
    pub fn get(&mut self, package_id: i64) -> Option<&PackageSnapshot> {
        let expired = self
            .slots
            .get(&package_id)
            .is_some_and(|slot| slot.stored_at.elapsed() > self.ttl);
        if expired {
            debug!(component = "fetch_cache", package_id, "entry expired");
            self.slots.remove(&package_id);
        }
        self.slots.get(&package_id).map(|slot| &slot.snapshot)
    }

    /// Drop one entry; call after a patch for this package was applied.
    pub fn invalidate(&mut self, package_id: i64) {
        if self.slots.remove(&package_id).is_some() {
            debug!(component = "fetch_cache", package_id, "entry invalidated");
        }
    }

    /// Drop everything.
    pub fn invalidate_all(&mut self) {
        let count = self.slots.len();
        self.slots.clear();
        debug!(component = "fetch_cache", count, "cache cleared");
    }

    /// Number of live (possibly expired, not yet evicted) entries.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no entries are held.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
