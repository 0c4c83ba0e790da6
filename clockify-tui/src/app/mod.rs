use crate::config::ClockifyConfig;
use crate::stopwatch::{self, Clock, DayLabel, Reading};
use crate::time_utils::format_clock_time;

mod state;

pub use state::{FocusedBox, TextInput, TimerSize, TimerState};

/// All widget state. The UI renders from this after every transition.
pub struct App {
    pub running: bool,
    pub timer_state: TimerState,
    pub reading: Reading,
    pub start_input: TextInput,
    pub day_label: DayLabel,
    pub focused_box: FocusedBox,
    pub timer_size: TimerSize,
    pub throbber_state: throbber_widgets_tui::ThrobberState,
    clock: Box<dyn Clock>,
}

impl App {
    pub fn new(cfg: &ClockifyConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            running: true,
            timer_state: TimerState::Stopped,
            reading: Reading::default(),
            start_input: TextInput::new(),
            day_label: DayLabel::Empty,
            focused_box: FocusedBox::Timer,
            timer_size: cfg.timer_size,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
            clock,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.timer_state == TimerState::Running
    }

    /// Start counting from the current moment.
    pub fn start_timer(&mut self) {
        if self.is_running() {
            return;
        }
        let now = self.clock.now();
        self.day_label = DayLabel::Today;
        self.start_input = TextInput::from_str(&format_clock_time(now.time()));
        self.reading = Reading::default();
        self.timer_state = TimerState::Running;
        tracing::info!(start = %self.start_input.value, "timer started");
    }

    /// Re-anchor the running timer on the typed start time.
    ///
    /// Does nothing while stopped. Unparseable text leaves the counter in
    /// the invalid reading under a Today label. A start still ahead after
    /// moving back a day is invalid too but keeps yesterday's date.
    pub fn set_custom_start(&mut self) {
        if !self.is_running() {
            return;
        }
        let now = self.clock.now();
        match stopwatch::resolve_typed_start(&self.start_input.value, now) {
            Ok(resolved) => {
                self.day_label = resolved.day;
                self.reading = Reading::Valid(resolved.elapsed);
                tracing::info!(
                    start = %resolved.start,
                    day = %resolved.day,
                    elapsed = %resolved.elapsed,
                    "custom start time applied"
                );
            }
            Err(err) => {
                self.day_label = err.day_label();
                self.reading = Reading::Invalid;
            }
        }
    }

    pub fn stop_timer(&mut self) {
        if self.is_running() {
            tracing::info!(elapsed = %self.reading, "timer stopped");
        }
        self.timer_state = TimerState::Stopped;
        self.reading = Reading::default();
        self.start_input.clear();
        self.day_label = DayLabel::Empty;
    }

    /// One-second refresh.
    pub fn tick(&mut self) {
        if !self.is_running() {
            return;
        }
        self.reading.tick();
        self.throbber_state.calc_next();
    }

    /// Counter text: the live reading while running, zeros otherwise.
    pub fn format_elapsed(&self) -> String {
        match self.timer_state {
            TimerState::Running => self.reading.to_string(),
            TimerState::Stopped => "00:00:00".to_string(),
        }
    }

    pub fn toggle_timer_size(&mut self) {
        self.timer_size = match self.timer_size {
            TimerSize::Normal => TimerSize::Large,
            TimerSize::Large => TimerSize::Normal,
        };
    }

    pub fn focus_next(&mut self) {
        self.focused_box = match self.focused_box {
            FocusedBox::Timer => FocusedBox::StartTime,
            FocusedBox::StartTime => FocusedBox::Timer,
        };
    }

    pub fn get_contextual_status(&self) -> &'static str {
        match (self.focused_box, self.timer_state) {
            (FocusedBox::StartTime, TimerState::Running) => {
                "Type a start time like 9:30:00 AM, then Enter to set it"
            }
            (FocusedBox::StartTime, TimerState::Stopped) => {
                "Start the timer before setting a custom start time"
            }
            (FocusedBox::Timer, TimerState::Running) => "Timer running",
            (FocusedBox::Timer, TimerState::Stopped) => "Press Space to start",
        }
    }
}
