use crate::config::UiConfig;
use crate::ui::app::App;
use crate::ui::counter::CounterView;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Run the interactive counter until the user quits. Returns the final count.
pub fn run(config: &UiConfig, view: CounterView) -> io::Result<i64> {
    let (mut terminal, guard) = setup_terminal(config.mouse_capture)?;
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let mut app = App::new(view, config.title.clone());
    let events = EventHandler::new(tick_rate);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!(count = app.view().count(), "counter view started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Tick) => app.on_tick(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                tracing::warn!("input thread exited");
                break;
            }
        }
    }

    drop(events);
    drop(guard);
    Ok(app.view().count())
}
