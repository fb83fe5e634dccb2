//! Equality-gated derived views of an observable.

use parking_lot::{Mutex, RwLock};
use std::sync::{Arc, Weak};

use super::observable::Observable;
use super::registry::Registry;
use super::Subscription;

struct Inner<T> {
    current: RwLock<T>,
    registry: Registry<T>,
    /// Keeps the source subscription alive for the projection's lifetime.
    source: Mutex<Option<Subscription>>,
}

/// A read-only view of one slice of an [`Observable`].
///
/// The projection re-evaluates its selector on every source replacement,
/// but notifies its own observers only when the selected value actually
/// changed. This lets consumers subscribe to a single field without
/// waking on unrelated updates.
///
/// Cloning a `Projection` shares the cache and observer registry.
pub struct Projection<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Projection<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Projection<T> {
    /// Derive a projection from `source` via `select`.
    ///
    /// The selector runs once at construction to seed the cache, then once
    /// per source replacement.
    pub fn new<S>(source: &Observable<S>, select: impl Fn(&S) -> T + Send + Sync + 'static) -> Self
    where
        S: Clone + Send + Sync + 'static,
    {
        let initial = source.with(|value| select(value));
        let inner = Arc::new(Inner {
            current: RwLock::new(initial),
            registry: Registry::new(),
            source: Mutex::new(None),
        });

        let weak: Weak<Inner<T>> = Arc::downgrade(&inner);
        let subscription = source.subscribe(move |value| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let next = select(value);
            {
                let mut current = inner.current.write();
                if *current == next {
                    return;
                }
                *current = next.clone();
            }
            inner.registry.notify(&next);
        });
        *inner.source.lock() = Some(subscription);

        Self { inner }
    }

    /// Clone of the last selected value.
    pub fn get(&self) -> T {
        self.inner.current.read().clone()
    }

    /// Borrow-based read of the last selected value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.current.read())
    }

    /// Register `callback` to run whenever the selected value changes.
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

impl<T: Clone + PartialEq + Send + Sync + std::fmt::Debug + 'static> std::fmt::Debug
    for Projection<T>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Projection")
            .field("current", &*self.inner.current.read())
            .finish()
    }
}
