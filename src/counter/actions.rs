//! Action-only handle onto the counter ViewModel.

use std::sync::Arc;

use super::view_model::CounterCore;

/// Exposes the four counter actions without any read or observe surface.
///
/// Handed out by [`CounterViewModel::actions`](super::CounterViewModel::actions)
/// so a dispatch site (a button handler, a key binding) can trigger
/// mutations without becoming a state observer. Cheap to clone; clones
/// drive the same underlying state.
#[derive(Clone)]
pub struct CounterActions {
    core: Arc<CounterCore>,
}

impl CounterActions {
    pub(crate) fn new(core: Arc<CounterCore>) -> Self {
        Self { core }
    }

    pub async fn increment(&self) {
        self.core.increment().await;
    }

    pub async fn increment_batch(&self) {
        self.core.increment_batch().await;
    }

    pub async fn reset(&self) {
        self.core.reset().await;
    }

    pub async fn set_count(&self, value: i64) {
        self.core.set_count(value).await;
    }
}
