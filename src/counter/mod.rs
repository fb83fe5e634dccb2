//! The counter feature: state record, message rules, and the ViewModel.

mod actions;
mod messages;
mod state;
mod view_model;

pub use actions::CounterActions;
pub use messages::{batch_message, custom_message, message_for_count};
pub use state::{CounterState, INITIAL_MESSAGE, NEGATIVE_VALUE_MESSAGE, RESET_MESSAGE};
pub use view_model::CounterViewModel;
