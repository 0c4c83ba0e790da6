use crate::app::{App, FocusedBox};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

/// Keys while the start-time field has focus. Text is free-form.
pub(super) fn handle_start_time_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Enter => enqueue_action(action_tx, Action::SetCustomStart),
        KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => app.focused_box = FocusedBox::Timer,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.start_input.insert(c);
        }
        KeyCode::Backspace => app.start_input.backspace(),
        KeyCode::Delete => app.start_input.delete(),
        KeyCode::Left => app.start_input.move_left(),
        KeyCode::Right => app.start_input.move_right(),
        KeyCode::Home => app.start_input.home(),
        KeyCode::End => app.start_input.end(),
        _ => {}
    }
}
