use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::shutdown::ShutdownHandle;

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
}

/// Reads terminal events on a background thread and forwards them to the UI
/// loop, which is the only place state changes.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if shutdown.is_shutting_down() {
                    let _ = tx.send(AppEvent::Shutdown);
                    break;
                }

                // Short poll timeout so the shutdown flag is checked often
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            if tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            let _ = tx.send(AppEvent::Resize(cols, rows));
                        }
                        Ok(_) => {}
                        Err(err) => {
                            tracing::error!(error = %err, "terminal read failed");
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "terminal poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
