use crate::app::{App, FocusedBox};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

mod start_time;
mod timer;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    // Ctrl+C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.focused_box {
        FocusedBox::Timer => timer::handle_timer_key(key, app, action_tx),
        FocusedBox::StartTime => start_time::handle_start_time_key(key, app, action_tx),
    }
}
