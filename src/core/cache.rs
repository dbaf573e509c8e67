//! In-memory LRU memoisation of derived league views.
//!
//! Standings are pure functions of the snapshot, so a cached table is valid
//! for the lifetime of the `League` it was computed from.

use lru::LruCache;
use std::{
    fs,
    hash::Hash,
    io::Read,
    num::NonZeroUsize,
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::cli::types::{DivisionId, GameWeekIndex};


/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Cache key for one division's table in one game week.
pub type StandingsKey = (DivisionId, GameWeekIndex);

/// Thread-safe LRU cache shared by parallel division workers.
pub struct MemoCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    entries: Arc<Mutex<LruCache<K, V>>>,
    capacity: usize,
}

impl<K, V> MemoCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// A capacity of 0 is treated as 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Arc::new(Mutex::new(LruCache::new(capacity))),
            capacity: capacity.get(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<K, V>> {
        // A panic mid-insert leaves the LRU itself consistent.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.lock().get(key).cloned()
    }

    pub fn put(&self, key: K, value: V) {
        self.lock().put(key, value);
    }

    /// Return the cached value or compute, store and return it.
    ///
    /// The lock is not held while `compute` runs, so two callers racing on
    /// the same key may both compute; the values are identical.
    pub fn get_or_try_insert<E, F>(&self, key: K, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(value) = self.get(&key) {
            return Ok(value);
        }
        let value = compute()?;
        self.put(key, value.clone());
        Ok(value)
    }

    /// (entries, capacity)
    pub fn stats(&self) -> (usize, usize) {
        (self.lock().len(), self.capacity)
    }
}

impl<K, V> Clone for MemoCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            capacity: self.capacity,
        }
    }
}
