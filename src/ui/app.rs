use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;

use crate::counter::{CounterActions, CounterViewModel};
use crate::reactive::{Projection, Subscription};
use crate::ui::events::AppEvent;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Counter,
    SetCountInput,
}

/// UI-side state: focus, the set-count input buffer, and the handles into
/// the counter core. All counter data is read through the three field
/// projections; mutations go through the action handle only.
pub struct App {
    should_quit: bool,
    focus: Focus,
    actions: CounterActions,
    count: Projection<i64>,
    message: Projection<String>,
    loading: Projection<bool>,
    runtime: Handle,
    input_buffer: String,
    input_error: Option<String>,
    spinner_tick: u8,
    /// Keeps the projection observers alive for the app's lifetime.
    _subscriptions: Vec<Subscription>,
}

impl App {
    pub fn new(
        view_model: Arc<CounterViewModel>,
        runtime: Handle,
        events: Sender<AppEvent>,
    ) -> Self {
        let count = view_model.count();
        let message = view_model.message();
        let loading = view_model.is_loading();

        // Narrow subscriptions: each field wakes the event loop only when
        // that field actually changed.
        let mut subscriptions = Vec::new();
        let tx = events.clone();
        subscriptions.push(count.subscribe(move |_| {
            let _ = tx.send(AppEvent::StateChanged);
        }));
        let tx = events.clone();
        subscriptions.push(message.subscribe(move |_| {
            let _ = tx.send(AppEvent::StateChanged);
        }));
        let tx = events;
        subscriptions.push(loading.subscribe(move |_| {
            let _ = tx.send(AppEvent::StateChanged);
        }));

        Self {
            should_quit: false,
            focus: Focus::Counter,
            actions: view_model.actions(),
            count,
            message,
            loading,
            runtime,
            input_buffer: String::new(),
            input_error: None,
            spinner_tick: 0,
            _subscriptions: subscriptions,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn count_value(&self) -> i64 {
        self.count.get()
    }

    pub fn message_text(&self) -> String {
        self.message.get()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn spinner_tick(&self) -> u8 {
        self.spinner_tick
    }

    pub fn on_tick(&mut self) {
        if self.loading.get() {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    pub fn dispatch_increment(&self) {
        let actions = self.actions.clone();
        self.runtime.spawn(async move { actions.increment().await });
    }

    pub fn dispatch_increment_batch(&self) {
        let actions = self.actions.clone();
        self.runtime
            .spawn(async move { actions.increment_batch().await });
    }

    pub fn dispatch_reset(&self) {
        let actions = self.actions.clone();
        self.runtime.spawn(async move { actions.reset().await });
    }

    pub fn open_set_count_input(&mut self) {
        self.focus = Focus::SetCountInput;
        self.input_buffer.clear();
        self.input_error = None;
    }

    pub fn cancel_set_count_input(&mut self) {
        self.focus = Focus::Counter;
        self.input_buffer.clear();
        self.input_error = None;
    }

    pub fn push_input_char(&mut self, ch: char) {
        self.input_buffer.push(ch);
        self.input_error = None;
    }

    pub fn pop_input_char(&mut self) {
        self.input_buffer.pop();
    }

    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    pub fn input_error(&self) -> Option<&str> {
        self.input_error.as_deref()
    }

    /// Parse the buffer and dispatch `set_count`.
    ///
    /// Parse failures stay in the UI; the ViewModel never sees
    /// non-numeric input. Negative numbers parse fine and are passed
    /// through, where the core answers with its error message state.
    pub fn submit_set_count(&mut self) {
        let raw = self.input_buffer.trim();
        match raw.parse::<i64>() {
            Ok(value) => {
                tracing::debug!(value, "set count requested");
                let actions = self.actions.clone();
                self.runtime
                    .spawn(async move { actions.set_count(value).await });
                self.cancel_set_count_input();
            }
            Err(_) => {
                self.input_error = Some(format!("not a number: {:?}", raw));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn test_app(runtime: &tokio::runtime::Runtime) -> App {
        let (tx, _rx) = mpsc::channel();
        App::new(
            Arc::new(CounterViewModel::new()),
            runtime.handle().clone(),
            tx,
        )
    }

    #[test]
    fn starts_on_the_counter_screen() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let app = test_app(&runtime);
        assert_eq!(app.focus(), Focus::Counter);
        assert!(!app.should_quit());
        assert_eq!(app.count_value(), 0);
    }

    #[test]
    fn non_numeric_input_stays_in_the_ui() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = test_app(&runtime);
        app.open_set_count_input();
        app.push_input_char('-');
        app.submit_set_count();

        assert!(app.input_error().is_some());
        assert_eq!(app.focus(), Focus::SetCountInput);
    }

    #[test]
    fn numeric_input_dispatches_and_closes_the_field() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = test_app(&runtime);
        app.open_set_count_input();
        app.push_input_char('4');
        app.push_input_char('2');
        app.submit_set_count();

        assert_eq!(app.focus(), Focus::Counter);
        assert!(app.input_buffer().is_empty());
        assert!(app.input_error().is_none());
    }

    #[test]
    fn editing_the_buffer() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = test_app(&runtime);
        app.open_set_count_input();
        app.push_input_char('1');
        app.push_input_char('2');
        app.pop_input_char();
        assert_eq!(app.input_buffer(), "1");

        app.cancel_set_count_input();
        assert_eq!(app.focus(), Focus::Counter);
        assert!(app.input_buffer().is_empty());
    }

    #[test]
    fn spinner_advances_only_while_loading() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = test_app(&runtime);
        app.on_tick();
        assert_eq!(app.spinner_tick(), 0);
    }
}
