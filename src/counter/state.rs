//! Immutable display state for the counter screen.

/// Prompt shown before the first action.
pub const INITIAL_MESSAGE: &str = "press + to start counting";

/// Published by a completed reset.
pub const RESET_MESSAGE: &str = "counter was reset";

/// Published when `set_count` receives a negative value.
pub const NEGATIVE_VALUE_MESSAGE: &str = "error: negative values are not allowed";

/// Snapshot of everything the counter screen renders.
///
/// Instances are never mutated in place; the ViewModel replaces its
/// current instance wholesale on every change. Equality is structural so
/// observers can cheaply detect no-op updates. The count is kept `>= 0`
/// by the ViewModel's actions, not by this type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterState {
    pub count: i64,
    pub message: String,
    pub is_loading: bool,
}

impl CounterState {
    /// The state a fresh ViewModel starts from: zero, prompt, idle.
    pub fn initial() -> Self {
        Self {
            count: 0,
            message: INITIAL_MESSAGE.to_string(),
            is_loading: false,
        }
    }

    /// Copy with the loading flag raised; count and message unchanged.
    pub fn loading(&self) -> Self {
        Self {
            is_loading: true,
            ..self.clone()
        }
    }

    /// Copy with only the message replaced.
    pub fn with_message(&self, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..self.clone()
        }
    }
}

impl Default for CounterState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_zero_idle_prompt() {
        let state = CounterState::initial();
        assert_eq!(state.count, 0);
        assert_eq!(state.message, INITIAL_MESSAGE);
        assert!(!state.is_loading);
    }

    #[test]
    fn default_matches_initial() {
        assert_eq!(CounterState::default(), CounterState::initial());
    }

    #[test]
    fn equality_is_structural() {
        let a = CounterState {
            count: 3,
            message: "hello".to_string(),
            is_loading: false,
        };
        let b = a.clone();
        assert_eq!(a, b);

        assert_ne!(a, CounterState { count: 4, ..a.clone() });
        assert_ne!(
            a,
            CounterState {
                message: "other".to_string(),
                ..a.clone()
            }
        );
        assert_ne!(
            a,
            CounterState {
                is_loading: true,
                ..a.clone()
            }
        );
    }

    #[test]
    fn loading_copy_keeps_count_and_message() {
        let state = CounterState {
            count: 12,
            message: "busy soon".to_string(),
            is_loading: false,
        };
        let loading = state.loading();
        assert_eq!(loading.count, 12);
        assert_eq!(loading.message, "busy soon");
        assert!(loading.is_loading);
    }

    #[test]
    fn with_message_keeps_count_and_loading() {
        let state = CounterState {
            count: 2,
            message: "old".to_string(),
            is_loading: true,
        };
        let updated = state.with_message("new");
        assert_eq!(updated.count, 2);
        assert!(updated.is_loading);
        assert_eq!(updated.message, "new");
    }
}
