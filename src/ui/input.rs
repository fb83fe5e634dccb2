use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Focus};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.focus() {
        Focus::SetCountInput => handle_input_key(app, key),
        Focus::Counter => handle_counter_key(app, key),
    }
}

fn handle_counter_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('i') => app.dispatch_increment(),
        KeyCode::Char('b') => app.dispatch_increment_batch(),
        KeyCode::Char('r') => app.dispatch_reset(),
        KeyCode::Char('s') => app.open_set_count_input(),
        _ => {}
    }
}

fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_set_count_input(),
        KeyCode::Enter => app.submit_set_count(),
        KeyCode::Backspace => app.pop_input_char(),
        KeyCode::Char(ch) if ch.is_ascii_digit() || ch == '-' => app.push_input_char(ch),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::CounterViewModel;
    use std::sync::{mpsc, Arc};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app(runtime: &tokio::runtime::Runtime) -> App {
        let (tx, _rx) = mpsc::channel();
        App::new(
            Arc::new(CounterViewModel::new()),
            runtime.handle().clone(),
            tx,
        )
    }

    #[test]
    fn q_quits_from_the_counter_screen() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = test_app(&runtime);
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn s_opens_the_set_count_field_and_esc_closes_it() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = test_app(&runtime);
        handle_key(&mut app, press(KeyCode::Char('s')));
        assert_eq!(app.focus(), Focus::SetCountInput);

        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.focus(), Focus::Counter);
        assert!(!app.should_quit());
    }

    #[test]
    fn digits_and_minus_reach_the_buffer_letters_do_not() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = test_app(&runtime);
        handle_key(&mut app, press(KeyCode::Char('s')));
        handle_key(&mut app, press(KeyCode::Char('-')));
        handle_key(&mut app, press(KeyCode::Char('4')));
        handle_key(&mut app, press(KeyCode::Char('x')));
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.input_buffer(), "-42");
    }

    #[test]
    fn ctrl_c_quits_from_any_focus() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = test_app(&runtime);
        handle_key(&mut app, press(KeyCode::Char('s')));
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit());
    }
}
