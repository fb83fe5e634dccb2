//! Shared observable value container.

use parking_lot::RwLock;
use std::sync::{Arc, Weak};

use super::registry::Registry;
use super::Subscription;

struct Inner<T> {
    value: RwLock<T>,
    registry: Registry<T>,
}

/// A shared value with change notification via observer callbacks.
///
/// Cloning an `Observable` creates another handle to the same value.
/// Every call to [`set`](Observable::set) replaces the value wholesale and
/// publishes the replacement to all observers, including replacements
/// that compare equal to the previous value. Consumers that only care
/// about actual changes should observe through a
/// [`Projection`](super::Projection) instead.
pub struct Observable<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: RwLock::new(value),
                registry: Registry::new(),
            }),
        }
    }

    /// Clone of the current value. No side effects.
    pub fn get(&self) -> T {
        self.inner.value.read().clone()
    }

    /// Borrow-based read of the current value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.read())
    }

    /// Replace the current value and notify every observer.
    ///
    /// The value lock is released before callbacks run, so observers may
    /// read the container or register further observers from inside a
    /// callback.
    pub fn set(&self, value: T) {
        *self.inner.value.write() = value.clone();
        self.inner.registry.notify(&value);
    }

    /// Register `callback` to run on every subsequent replacement.
    pub fn subscribe(&self, callback: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let id = self.inner.registry.insert(Arc::new(callback));
        let weak: Weak<Inner<T>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.registry.remove(id);
            }
        })
    }
}

impl<T: Clone + Send + Sync + std::fmt::Debug + 'static> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("value", &*self.inner.value.read())
            .finish()
    }
}
