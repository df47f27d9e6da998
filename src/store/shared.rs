// Copyright (c) 2025 - Cowboy AI, Inc.
//! Store handle shared between concurrent request handlers
//!
//! One exclusive lock guards the whole entity graph. Every operation runs
//! to completion under the lock, so callers observe the same sequential
//! behavior as a single-threaded store.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{DataStore, MemoryStore};

type BoxedStore = Box<dyn DataStore + Send>;

/// Cloneable handle to a [`DataStore`] behind a single mutex
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<Mutex<BoxedStore>>,
}

impl SharedStore {
    pub fn new(store: impl DataStore + Send + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(store))),
        }
    }

    /// Run a read-only operation under the lock
    pub fn read<R>(&self, op: impl FnOnce(&dyn DataStore) -> R) -> R {
        let guard = self.lock();
        op(&**guard)
    }

    /// Run a mutating operation under the lock
    pub fn write<R>(&self, op: impl FnOnce(&mut dyn DataStore) -> R) -> R {
        let mut guard = self.lock();
        op(&mut **guard)
    }

    // Store operations never panic while holding the guard, so a poisoned
    // lock still protects a consistent graph.
    fn lock(&self) -> MutexGuard<'_, BoxedStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SharedStore {
    fn default() -> Self {
        Self::new(MemoryStore::new())
    }
}

impl From<MemoryStore> for SharedStore {
    fn from(store: MemoryStore) -> Self {
        Self::new(store)
    }
}

impl std::fmt::Debug for SharedStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedStore").finish_non_exhaustive()
    }
}
