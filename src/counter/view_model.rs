//! The counter ViewModel: owns the observable state and the four actions.

use std::sync::Arc;
use std::time::Duration;

use crate::reactive::{Observable, Projection, Subscription};

use super::actions::CounterActions;
use super::messages::{batch_message, custom_message, message_for_count};
use super::state::{CounterState, NEGATIVE_VALUE_MESSAGE, RESET_MESSAGE};

const INCREMENT_DELAY: Duration = Duration::from_millis(300);
const BATCH_DELAY: Duration = Duration::from_millis(500);
const RESET_DELAY: Duration = Duration::from_millis(200);
const SET_COUNT_DELAY: Duration = Duration::from_millis(250);

const BATCH_STEP: i64 = 10;

/// Shared interior: the single current state plus the action logic.
///
/// Each action publishes a loading state, suspends for its simulated
/// delay, then publishes the result. The suspension holds no locks, so
/// reads and new subscriptions proceed while an action is in flight.
/// Overlapping actions are not sequenced; the later publish wins.
pub(crate) struct CounterCore {
    state: Observable<CounterState>,
}

impl CounterCore {
    fn new() -> Self {
        Self {
            state: Observable::new(CounterState::initial()),
        }
    }

    fn enter_loading(&self) {
        let next = self.state.with(CounterState::loading);
        self.state.set(next);
    }

    pub(crate) async fn increment(&self) {
        self.enter_loading();
        tokio::time::sleep(INCREMENT_DELAY).await;
        let new_count = self.state.with(|state| state.count) + 1;
        tracing::debug!(new_count, "increment finished");
        self.state.set(CounterState {
            count: new_count,
            message: message_for_count(new_count),
            is_loading: false,
        });
    }

    pub(crate) async fn increment_batch(&self) {
        self.enter_loading();
        tokio::time::sleep(BATCH_DELAY).await;
        let new_count = self.state.with(|state| state.count) + BATCH_STEP;
        tracing::debug!(new_count, "batch increment finished");
        self.state.set(CounterState {
            count: new_count,
            message: batch_message(new_count),
            is_loading: false,
        });
    }

    pub(crate) async fn reset(&self) {
        self.enter_loading();
        tokio::time::sleep(RESET_DELAY).await;
        tracing::debug!("counter reset");
        self.state.set(CounterState {
            message: RESET_MESSAGE.to_string(),
            ..CounterState::initial()
        });
    }

    pub(crate) async fn set_count(&self, value: i64) {
        if value < 0 {
            // Rejected synchronously: message only, no loading phase, no
            // error surfaced to the caller.
            tracing::debug!(value, "rejected negative count");
            let next = self.state.with(|state| state.with_message(NEGATIVE_VALUE_MESSAGE));
            self.state.set(next);
            return;
        }
        self.enter_loading();
        tokio::time::sleep(SET_COUNT_DELAY).await;
        tracing::debug!(value, "count set");
        self.state.set(CounterState {
            count: value,
            message: custom_message(value),
            is_loading: false,
        });
    }
}

/// Owner of the counter's display state.
///
/// Holds exactly one current [`CounterState`] and replaces it wholesale
/// through the four action methods. Reads, whole-state observation, and
/// three per-field projections are available at any time, including while
/// an action's delay is pending.
pub struct CounterViewModel {
    core: Arc<CounterCore>,
    count: Projection<i64>,
    message: Projection<String>,
    is_loading: Projection<bool>,
}

impl CounterViewModel {
    pub fn new() -> Self {
        let core = Arc::new(CounterCore::new());
        let count = Projection::new(&core.state, |state| state.count);
        let message = Projection::new(&core.state, |state| state.message.clone());
        let is_loading = Projection::new(&core.state, |state| state.is_loading);
        Self {
            core,
            count,
            message,
            is_loading,
        }
    }

    /// The current state. Synchronous, no side effects.
    pub fn current_state(&self) -> CounterState {
        self.core.state.get()
    }

    /// Observe every state replacement. Dropping the handle deregisters.
    pub fn observe(
        &self,
        callback: impl Fn(&CounterState) + Send + Sync + 'static,
    ) -> Subscription {
        self.core.state.subscribe(callback)
    }

    /// Projection of the count; notifies only when the count changes.
    pub fn count(&self) -> Projection<i64> {
        self.count.clone()
    }

    /// Projection of the status message.
    pub fn message(&self) -> Projection<String> {
        self.message.clone()
    }

    /// Projection of the loading flag.
    pub fn is_loading(&self) -> Projection<bool> {
        self.is_loading.clone()
    }

    /// Handle exposing only the action methods. Obtaining it never
    /// registers an observer.
    pub fn actions(&self) -> CounterActions {
        CounterActions::new(Arc::clone(&self.core))
    }

    /// Add one to the count after the simulated delay. Always succeeds.
    pub async fn increment(&self) {
        self.core.increment().await;
    }

    /// Add ten to the count after a longer simulated delay.
    pub async fn increment_batch(&self) {
        self.core.increment_batch().await;
    }

    /// Return to the initial state, with the reset message.
    pub async fn reset(&self) {
        self.core.reset().await;
    }

    /// Jump the count to `value`; negative input only updates the message.
    pub async fn set_count(&self, value: i64) {
        self.core.set_count(value).await;
    }
}

impl Default for CounterViewModel {
    fn default() -> Self {
        Self::new()
    }
}
