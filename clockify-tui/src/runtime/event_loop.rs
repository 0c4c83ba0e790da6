use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use super::action_queue::{channel, Action};
use super::actions::run_action;
use super::ticker::{Ticker, TICK_PERIOD};
use super::views::handle_view_key;

/// Drive the widget until the user quits.
///
/// Input, queued actions and the tick schedule are multiplexed on one task.
/// The screen is redrawn after each of them is handled.
pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();
    let mut events = EventStream::new();
    let mut ticker = Ticker::new(TICK_PERIOD);

    terminal.draw(|f| ui::render(f, app))?;

    while app.running {
        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    handle_view_key(key, app, &action_tx);
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some(action) = action_rx.recv() => {
                run_action(action, app);
            }
            _ = ticker.tick() => {
                run_action(Action::Tick, app);
            }
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app);
        }

        ticker.sync(app.is_running());
        terminal.draw(|f| ui::render(f, app))?;
    }

    ticker.disarm();
    Ok(())
}
