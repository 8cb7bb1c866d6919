//! # Single-Entry Selector Cache
//!
//! Stores the last declared inputs and the output derived from them. A call
//! with unchanged inputs returns the stored `Arc`; anything else recomputes
//! and replaces the entry.

use crate::dependencies::Dependencies;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::trace;

/// Counters describing how a selector has been used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectorStats {
    /// Calls answered from the cache.
    pub hits: u64,
    /// Calls that ran the compute function.
    pub recomputations: u64,
}

struct CacheEntry<D, O> {
    deps: D,
    output: Arc<O>,
}

/// Memoized derivation with a single cache entry.
pub struct Selector<D, O> {
    name: &'static str,
    entry: Mutex<Option<CacheEntry<D, O>>>,
    hits: AtomicU64,
    recomputations: AtomicU64,
}

impl<D: Dependencies, O> Selector<D, O> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entry: Mutex::new(None),
            hits: AtomicU64::new(0),
            recomputations: AtomicU64::new(0),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Return the cached output for `deps`, computing it if the inputs
    /// changed since the last call.
    ///
    /// The entry lock is held while `compute` runs, so concurrent callers with
    /// the same inputs never compute twice. `compute` must not call back into
    /// this same selector.
    pub fn select<F>(&self, deps: D, compute: F) -> Arc<O>
    where
        F: FnOnce(&D) -> O,
    {
        let mut entry = self.entry.lock();

        if let Some(cached) = entry.as_ref() {
            if deps.unchanged(&cached.deps) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                trace!(selector = self.name, "Selector cache hit");
                return Arc::clone(&cached.output);
            }
        }

        let output = Arc::new(compute(&deps));
        self.recomputations.fetch_add(1, Ordering::Relaxed);
        trace!(selector = self.name, "Selector recomputed");

        *entry = Some(CacheEntry {
            deps,
            output: Arc::clone(&output),
        });
        output
    }

    /// Like [`Selector::select`], but a recomputed output equal to the cached
    /// one keeps the cached `Arc`, so downstream selectors keyed on it stay
    /// warm.
    pub fn select_reusing_equal<F>(&self, deps: D, compute: F) -> Arc<O>
    where
        F: FnOnce(&D) -> O,
        O: PartialEq,
    {
        let mut entry = self.entry.lock();

        if let Some(cached) = entry.as_ref() {
            if deps.unchanged(&cached.deps) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                trace!(selector = self.name, "Selector cache hit");
                return Arc::clone(&cached.output);
            }
        }

        let computed = compute(&deps);
        self.recomputations.fetch_add(1, Ordering::Relaxed);

        let output = match entry.take() {
            Some(cached) if *cached.output == computed => {
                trace!(selector = self.name, "Selector recomputed an equal output");
                cached.output
            }
            _ => {
                trace!(selector = self.name, "Selector recomputed");
                Arc::new(computed)
            }
        };

        *entry = Some(CacheEntry {
            deps,
            output: Arc::clone(&output),
        });
        output
    }

    pub fn stats(&self) -> SelectorStats {
        SelectorStats {
            hits: self.hits.load(Ordering::Relaxed),
            recomputations: self.recomputations.load(Ordering::Relaxed),
        }
    }

    /// Drop the cache entry and zero the counters.
    pub fn reset(&self) {
        *self.entry.lock() = None;
        self.hits.store(0, Ordering::Relaxed);
        self.recomputations.store(0, Ordering::Relaxed);
    }
}

impl<D, O> std::fmt::Debug for Selector<D, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selector")
            .field("name", &self.name)
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field(
                "recomputations",
                &self.recomputations.load(Ordering::Relaxed),
            )
            .finish()
    }
}
