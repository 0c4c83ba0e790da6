use super::*;
use crate::app::{FocusedBox, TimerSize, TimerState};

pub fn render_timer_view(frame: &mut Frame, app: &App, body: Rect) {
    let timer_height = match app.timer_size {
        TimerSize::Normal => 3,
        TimerSize::Large => 11,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(timer_height), // Timer display (dynamic)
            Constraint::Length(3),            // Start time + day label
            Constraint::Min(0),
            Constraint::Length(3), // Status
            Constraint::Length(3), // Controls
        ])
        .split(body);

    render_timer(frame, chunks[0], app);
    render_start_row(frame, chunks[1], app);
    render_status(frame, chunks[3], app);
    render_controls(frame, chunks[4], app);
}

fn render_timer(frame: &mut Frame, area: Rect, app: &App) {
    let is_running = app.is_running();
    let is_focused = app.focused_box == FocusedBox::Timer;

    let border_style = if is_focused {
        Style::default().fg(Color::Magenta)
    } else if is_running {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Timer ")
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    match app.timer_size {
        TimerSize::Normal => {
            let timer_text = match app.timer_state {
                TimerState::Running => format!("{} ⏵ (running)", app.format_elapsed()),
                TimerState::Stopped => "00:00:00 (not running)".to_string(),
            };

            let timer = Paragraph::new(timer_text)
                .style(Style::default().fg(Color::White))
                .alignment(Alignment::Left)
                .block(block);

            frame.render_widget(timer, area);
        }
        TimerSize::Large => {
            let time_str = app.format_elapsed();
            let status = match app.timer_state {
                TimerState::Running => "⏵ Running",
                TimerState::Stopped => "Not running",
            };

            let mut lines = vec![Line::from("")];
            lines.extend(render_large_time(&time_str));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                status,
                Style::default().fg(Color::White),
            )));
            lines.push(Line::from(""));

            let timer = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block);

            frame.render_widget(timer, area);
        }
    }
}

/// Editable start time on the left, day label on the right.
fn render_start_row(frame: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(18)])
        .split(area);

    let is_focused = app.focused_box == FocusedBox::StartTime;
    let border_style = if is_focused {
        Style::default().fg(Color::Magenta)
    } else if !app.start_input.value.is_empty() {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let input_text = if is_focused {
        let (before, after) = app.start_input.split_at_cursor();
        format!("{}█{}", before, after)
    } else {
        app.start_input.value.clone()
    };

    // Title with underlined E (edit)
    let title = vec![
        Span::raw(" Start ("),
        Span::styled("e", Style::default().add_modifier(Modifier::UNDERLINED)),
        Span::raw("dit) "),
    ];

    let input = Paragraph::new(input_text)
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::from(title))
                .border_style(border_style)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(input, cols[0]);

    let day = Paragraph::new(app.day_label.to_string())
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Day ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(day, cols[1]);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = Paragraph::new(app.get_contextual_status())
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Status ")
                .border_style(Style::default().fg(Color::White))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(status, area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let key = Style::default().fg(Color::Yellow);
    let (toggle_label, toggle_style) = match app.timer_state {
        TimerState::Stopped => ("START", Style::default().fg(Color::Blue)),
        TimerState::Running => ("STOP", Style::default().fg(Color::Red)),
    };

    let line = vec![
        Span::styled("Space", key),
        Span::raw(": "),
        Span::styled(toggle_label, toggle_style.add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled("E", key),
        Span::raw(": Edit start  "),
        Span::styled("Enter", key),
        Span::raw(": Set Time  "),
        Span::styled("Tab", key),
        Span::raw(": Switch  "),
        Span::styled("T", key),
        Span::raw(": Toggle timer size  "),
        Span::styled("Q", key),
        Span::raw(": Quit"),
    ];

    let controls = Paragraph::new(Line::from(line))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::from(Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                )))
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(controls, area);
}

/// One padded row: spinner and app title on the left.
pub fn render_header(frame: &mut Frame, area: Rect, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // top padding
            Constraint::Length(1), // content
        ])
        .split(area);
    let content_row = rows[1];

    const LABEL: &str = " Clockify";
    let throbber_area = Rect {
        x: content_row.x + 3,
        y: content_row.y,
        width: 1,
        height: 1,
    };
    let label_area = Rect {
        x: throbber_area.x + 1,
        y: content_row.y,
        width: (LABEL.len() as u16).min(content_row.width.saturating_sub(4)),
        height: 1,
    };

    // Spins one step per tick while running
    let throbber = throbber_widgets_tui::Throbber::default()
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(if app.is_running() {
            throbber_widgets_tui::WhichUse::Spin
        } else {
            throbber_widgets_tui::WhichUse::Full
        });
    frame.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);
    frame.render_widget(
        Paragraph::new(Span::styled(LABEL, Style::default().fg(Color::Yellow))),
        label_area,
    );
}

const GLYPH_ROWS: usize = 5;

/// Block glyph rows, `#` filled. Anything unknown draws as a dash.
#[rustfmt::skip]
fn glyph(ch: char) -> [&'static str; GLYPH_ROWS] {
    match ch {
        '0' => ["#####", "##.##", "##.##", "##.##", "#####"],
        '1' => ["...##", "...##", "...##", "...##", "...##"],
        '2' => ["#####", "...##", "#####", "##...", "#####"],
        '3' => ["#####", "...##", "#####", "...##", "#####"],
        '4' => ["##.##", "##.##", "#####", "...##", "...##"],
        '5' => ["#####", "##...", "#####", "...##", "#####"],
        '6' => ["#####", "##...", "#####", "##.##", "#####"],
        '7' => ["#####", "...##", "...##", "...##", "...##"],
        '8' => ["#####", "##.##", "#####", "##.##", "#####"],
        '9' => ["#####", "##.##", "#####", "...##", "#####"],
        ':' => ["....", ".##.", "....", ".##.", "...."],
        _ => [".....", ".....", "#####", ".....", "....."],
    }
}

/// Render a counter string (`HH:MM:SS` or `--:--:--`) as block glyphs,
/// one column of space after each.
fn render_large_time(time_str: &str) -> Vec<Line<'static>> {
    (0..GLYPH_ROWS)
        .map(|row| {
            let mut line = String::new();
            for ch in time_str.chars() {
                line.extend(glyph(ch)[row].chars().map(|c| if c == '#' { '█' } else { ' ' }));
                line.push(' ');
            }
            Line::from(Span::styled(
                line,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect()
}
