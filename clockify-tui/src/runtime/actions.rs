use crate::app::{App, FocusedBox};

use super::action_queue::Action;

pub(super) fn run_action(action: Action, app: &mut App) {
    match action {
        Action::StartTimer => app.start_timer(),
        Action::StopTimer => app.stop_timer(),
        Action::SetCustomStart => {
            app.set_custom_start();
            // Leave the field once the time is applied so Space toggles again
            if app.is_running() {
                app.focused_box = FocusedBox::Timer;
            }
        }
        Action::Tick => app.tick(),
    }
}
