//! Thread-safe slice container with serial dispatch.

use std::sync::{Arc, RwLock};

use tokio::sync::watch;

use super::reducer::Reducer;

/// Thread-safe container for one resource's state slice.
///
/// Allows many concurrent readers while all transitions funnel through
/// the single `dispatch` path, serialized by the write lock. Handles
/// are cheap to clone and share the same underlying slice.
pub struct Store<R: Reducer> {
    state: Arc<RwLock<R::State>>,
    changes: watch::Sender<u64>,
}

impl<R: Reducer> Store<R> {
    /// Create a store holding the slice's default (at-rest) state.
    pub fn new() -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            state: Arc::new(RwLock::new(R::State::default())),
            changes,
        }
    }

    /// Fold a signal into the slice through the reducer.
    ///
    /// The write lock makes transitions serial: readers observe either
    /// the state before the signal or after it, never a partial update.
    pub fn dispatch(&self, signal: R::Signal) {
        {
            let mut guard = self.state.write().expect("store lock poisoned");
            *guard = R::reduce(std::mem::take(&mut *guard), signal);
        }
        self.changes.send_modify(|v| *v = v.wrapping_add(1));
    }

    /// Get a clone of the current slice state.
    ///
    /// This is cheap because slices are small Clone records.
    /// Multiple readers can call this concurrently.
    pub fn get(&self) -> R::State {
        self.state.read().expect("store lock poisoned").clone()
    }

    /// Subscribe to change notifications.
    ///
    /// The receiver tracks a change counter bumped on every dispatch;
    /// consumers await `changed()` and then `get()` a fresh snapshot.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            changes: self.changes.clone(),
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}
