//! Bounded cache of loaded HR tables
//!
//! Entries are keyed by the canonical path of the CSV file together with its
//! modification time. Touching the file produces a new key, so the next load
//! re-reads it; the superseded entry for that path is dropped on insert. When
//! the cache is full the oldest entry goes first. Failed loads are never
//! cached.

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::SystemTime;

use log::debug;

use crate::config::DEFAULT_CACHE_CAPACITY;
use crate::loader::load_hr_table;
use crate::models::HrTable;

/// Identity of a file version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub path: PathBuf,
    pub modified: SystemTime,
}

impl CacheKey {
    /// Key for the current version of `path`, or `None` if the file cannot be inspected
    pub fn for_path(path: &Path) -> Option<Self> {
        let path = path.canonicalize().ok()?;
        let modified = path.metadata().and_then(|m| m.modified()).ok()?;
        Some(Self { path, modified })
    }
}

#[derive(Debug, Default)]
struct CacheState {
    tables: HashMap<CacheKey, Arc<HrTable>>,
    order: VecDeque<CacheKey>,
}

/// Memoizing loader for HR tables
#[derive(Debug)]
pub struct TableCache {
    state: RwLock<CacheState>,
    max_entries: usize,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl Default for TableCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl TableCache {
    /// Create a cache holding at most `max_entries` tables
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        Self {
            state: RwLock::new(CacheState::default()),
            max_entries: max_entries.max(1),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Load `path`, reusing the cached table when the file is unchanged
    ///
    /// The returned table is shared; it is never modified by the cache.
    pub fn load(&self, path: &Path) -> Arc<HrTable> {
        let Some(key) = CacheKey::for_path(path) else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            return Arc::new(load_hr_table(path));
        };

        if let Some(table) = self.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("Cache hit for {}", key.path.display());
            return table;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let table = Arc::new(load_hr_table(path));
        if !table.is_empty() {
            self.insert(key, Arc::clone(&table));
        }
        table
    }

    fn get(&self, key: &CacheKey) -> Option<Arc<HrTable>> {
        // A poisoned lock only means another reader panicked; the map is still valid.
        let state = self.state.read().unwrap_or_else(std::sync::PoisonError::into_inner);
        state.tables.get(key).cloned()
    }

    fn insert(&self, key: CacheKey, table: Arc<HrTable>) {
        let mut state = self.state.write().unwrap_or_else(std::sync::PoisonError::into_inner);

        let stale: Vec<CacheKey> = state
            .order
            .iter()
            .filter(|existing| existing.path == key.path)
            .cloned()
            .collect();
        for old in &stale {
            debug!("Invalidating cached table for {}", old.path.display());
            state.tables.remove(old);
        }
        state.order.retain(|existing| existing.path != key.path);

        while state.order.len() >= self.max_entries {
            if let Some(oldest) = state.order.pop_front() {
                debug!("Evicting cached table for {}", oldest.path.display());
                state.tables.remove(&oldest);
            }
        }

        state.order.push_back(key.clone());
        state.tables.insert(key, table);
    }

    /// Number of cached tables
    pub fn len(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .tables
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached table
    pub fn clear(&self) {
        let mut state = self.state.write().unwrap_or_else(std::sync::PoisonError::into_inner);
        state.tables.clear();
        state.order.clear();
    }

    /// Loads served from the cache
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    /// Loads that went to disk
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }
}
