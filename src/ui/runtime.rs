use crate::shutdown::ShutdownCoordinator;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

pub fn run(mut app: App, shutdown: &ShutdownCoordinator) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate, shutdown.handle());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "terminal resized");
            }
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Shutdown) => {
                tracing::info!("shutdown signal received");
                app.request_quit();
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Stops the input thread before the terminal is restored.
    shutdown.signal();
    drop(guard);
    Ok(())
}
