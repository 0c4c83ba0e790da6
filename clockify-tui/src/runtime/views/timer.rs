use crate::app::{App, FocusedBox, TimerState};
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_timer_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        // START / STOP: only the button for the current state is shown
        KeyCode::Char(' ') | KeyCode::Enter => {
            let action = match app.timer_state {
                TimerState::Stopped => Action::StartTimer,
                TimerState::Running => Action::StopTimer,
            };
            enqueue_action(action_tx, action);
        }
        KeyCode::Tab | KeyCode::BackTab => app.focus_next(),
        KeyCode::Char('e') | KeyCode::Char('E') => app.focused_box = FocusedBox::StartTime,
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_timer_size(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClockifyConfig;
    use crate::stopwatch::FixedClock;
    use crossterm::event::KeyModifiers;
    use time::macros::datetime;

    use super::super::super::action_queue::channel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        App::new(
            &ClockifyConfig::default(),
            Box::new(FixedClock(datetime!(2026-10-16 10:00:00 +0))),
        )
    }

    fn trigger(app: &mut App, code: KeyCode) -> Option<Action> {
        let (tx, mut rx) = channel();
        handle_timer_key(key(code), app, &tx);
        rx.try_recv().ok()
    }

    #[test]
    fn space_starts_when_stopped() {
        let mut app = test_app();
        assert_eq!(trigger(&mut app, KeyCode::Char(' ')), Some(Action::StartTimer));
    }

    #[test]
    fn enter_stops_when_running() {
        let mut app = test_app();
        app.start_timer();
        assert_eq!(trigger(&mut app, KeyCode::Enter), Some(Action::StopTimer));
    }

    #[test]
    fn e_focuses_start_field() {
        let mut app = test_app();
        assert_eq!(trigger(&mut app, KeyCode::Char('e')), None);
        assert_eq!(app.focused_box, FocusedBox::StartTime);
    }

    #[test]
    fn q_quits() {
        let mut app = test_app();
        trigger(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }
}
