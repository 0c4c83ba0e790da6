use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

mod timer_view;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(frame.area());

    timer_view::render_header(frame, root[0], app);
    timer_view::render_timer_view(frame, app, root[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{FocusedBox, TextInput, TimerSize};
    use crate::config::ClockifyConfig;
    use crate::stopwatch::FixedClock;
    use ratatui::{backend::TestBackend, Terminal};
    use time::macros::datetime;

    fn test_app() -> App {
        App::new(
            &ClockifyConfig::default(),
            Box::new(FixedClock(datetime!(2026-10-16 10:00:00 +0))),
        )
    }

    fn render_to_string(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn stopped_shows_placeholder_and_start() {
        let mut app = test_app();
        let screen = render_to_string(&mut app);
        assert!(screen.contains("00:00:00 (not running)"));
        assert!(screen.contains("START"));
        assert!(!screen.contains("STOP"));
    }

    #[test]
    fn running_shows_counter_start_text_and_day() {
        let mut app = test_app();
        app.start_timer();
        for _ in 0..5 {
            app.tick();
        }
        let screen = render_to_string(&mut app);
        assert!(screen.contains("00:00:05"));
        assert!(screen.contains("10:00:00 AM"));
        assert!(screen.contains("Today"));
        assert!(screen.contains("STOP"));
    }

    #[test]
    fn focused_field_shows_cursor() {
        let mut app = test_app();
        app.start_timer();
        app.focused_box = FocusedBox::StartTime;
        app.start_input = TextInput::from_str("9:00");
        let screen = render_to_string(&mut app);
        assert!(screen.contains("9:00█"));
    }

    #[test]
    fn invalid_reading_renders_dashes_in_both_sizes() {
        let mut app = test_app();
        app.start_timer();
        app.start_input = TextInput::from_str("later");
        app.set_custom_start();
        assert!(render_to_string(&mut app).contains("--:--:--"));

        app.timer_size = TimerSize::Large;
        assert!(render_to_string(&mut app).contains("Running"));
    }
}
