pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod render;
pub mod terminal_guard;
pub mod theme;

use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::counter::CounterViewModel;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Failures that take the UI down.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("terminal I/O: {0}")]
    Terminal(#[from] std::io::Error),
    #[error("input thread disconnected")]
    InputDisconnected,
}

pub fn run(
    view_model: Arc<CounterViewModel>,
    runtime: Handle,
    tick_rate: Duration,
) -> Result<(), UiError> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(view_model, runtime, events.sender());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // Redraw happens at the top of the loop either way.
            Ok(AppEvent::StateChanged) => {}
            Ok(AppEvent::Resize(cols, rows)) => tracing::debug!(cols, rows, "terminal resized"),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return Err(UiError::InputDisconnected),
        }
    }

    drop(guard);
    Ok(())
}
