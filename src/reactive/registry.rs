//! Observer bookkeeping shared by `Observable` and `Projection`.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub(crate) type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A list of observer callbacks keyed by registration id.
pub(crate) struct Registry<T> {
    subscribers: Mutex<Vec<(u64, Callback<T>)>>,
    next_id: AtomicU64,
}

impl<T> Registry<T> {
    pub(crate) fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    pub(crate) fn insert(&self, callback: Callback<T>) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.subscribers.lock().push((id, callback));
        id
    }

    pub(crate) fn remove(&self, id: u64) {
        self.subscribers.lock().retain(|(entry_id, _)| *entry_id != id);
    }

    /// Invoke every registered callback with `value`.
    ///
    /// The subscriber list is snapshotted first so callbacks are free to
    /// register or deregister observers without deadlocking.
    pub(crate) fn notify(&self, value: &T) {
        let snapshot: Vec<Callback<T>> = self
            .subscribers
            .lock()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();
        for callback in &snapshot {
            (**callback)(value);
        }
    }
}

/// RAII deregistration handle returned by `subscribe`.
///
/// Dropping the handle removes the callback before the next notification
/// cycle. [`Subscription::forget`] keeps the registration alive for the
/// lifetime of the observed container instead.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub(crate) fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Give up the handle without deregistering the observer.
    pub fn forget(mut self) {
        self.cancel = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
