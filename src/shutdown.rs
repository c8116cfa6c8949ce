use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::{SIGINT, SIGTERM};

/// Owns the process-wide shutdown flag.
pub struct ShutdownCoordinator {
    shutdown: Arc<AtomicBool>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Raises the flag on SIGINT and SIGTERM.
    pub fn install_signal_handlers(&self) -> io::Result<()> {
        for signal in [SIGINT, SIGTERM] {
            signal_hook::flag::register(signal, Arc::clone(&self.shutdown))?;
        }
        Ok(())
    }

    /// Signal shutdown start
    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::info!("graceful shutdown initiated");
        }
    }

    /// Create a handle for sharing
    pub fn handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            shutdown: Arc::clone(&self.shutdown),
        }
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Read side of the shutdown flag, handed to worker threads.
#[derive(Clone)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }
}
