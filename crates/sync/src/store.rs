//! Query store - the single locally held copy of the product collection
//!
//! One entry exists per query identifier; the collection lives under
//! `PRODUCTS_KEY`. Entries are replaced wholesale on every transition, never
//! mutated in place, so a reader holding a clone always sees a consistent
//! snapshot.

use dashmap::DashMap;
use std::sync::Arc;

use agora_core::Product;
use agora_ports::CatalogError;

/// Query identifier for the product collection
pub const PRODUCTS_KEY: &str = "products";

/// Lifecycle of a cached query
///
/// `Idle -> Loading -> {Success, Error}`; `Error` re-enters `Loading` only
/// through an explicit invalidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// One cached collection: status, ordered items, last error
#[derive(Debug, Clone)]
pub struct CollectionEntry {
    pub status: QueryStatus,
    pub items: Vec<Product>,
    pub error: Option<CatalogError>,
}

impl CollectionEntry {
    pub fn idle() -> Self {
        Self {
            status: QueryStatus::Idle,
            items: Vec::new(),
            error: None,
        }
    }

    /// A fetch is in flight. Items and last error survive so the view can
    /// keep rendering stale data while it waits.
    pub fn loading(self) -> Self {
        Self {
            status: QueryStatus::Loading,
            ..self
        }
    }

    /// A fetch resolved with a fresh sequence
    pub fn resolved(self, items: Vec<Product>) -> Self {
        Self {
            status: QueryStatus::Success,
            items,
            error: None,
        }
    }

    /// A fetch failed. Previously cached items are retained (stale-while-error).
    pub fn failed(self, error: CatalogError) -> Self {
        Self {
            status: QueryStatus::Error,
            items: self.items,
            error: Some(error),
        }
    }

    /// Rebuild the sequence through a pure patch function; status and error
    /// are untouched.
    pub fn map_items(self, f: impl FnOnce(&[Product]) -> Vec<Product>) -> Self {
        let items = f(&self.items);
        Self { items, ..self }
    }

    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Loading
    }

    pub fn is_success(&self) -> bool {
        self.status == QueryStatus::Success
    }

    pub fn is_error(&self) -> bool {
        self.status == QueryStatus::Error
    }
}

impl Default for CollectionEntry {
    fn default() -> Self {
        Self::idle()
    }
}

/// In-memory query store
///
/// Thread-safe storage keyed by query identifier using DashMap.
/// Constructed fresh per test; shared by cloning.
pub struct QueryStore {
    entries: Arc<DashMap<String, CollectionEntry>>,
}

impl QueryStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
        }
    }

    /// Snapshot of an entry, if one exists
    pub fn get(&self, key: &str) -> Option<CollectionEntry> {
        self.entries.get(key).map(|e| e.value().clone())
    }

    /// Read-modify-write primitive
    ///
    /// Runs under the entry's shard lock, so interleaved completion handlers
    /// apply last-write-wins in the order they reach the store. A missing
    /// entry starts from `CollectionEntry::idle()`.
    pub fn update(&self, key: &str, f: impl FnOnce(CollectionEntry) -> CollectionEntry) {
        let mut entry = self
            .entries
            .entry(key.to_string())
            .or_insert_with(CollectionEntry::idle);
        let next = f(entry.value().clone());
        *entry.value_mut() = next;
    }
}

impl Default for QueryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for QueryStore {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}
