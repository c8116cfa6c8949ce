use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

/// Default log file: `<cache dir>/product-card/product-card.log`.
pub fn default_log_path() -> PathBuf {
    let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    cache_dir.join("product-card").join("product-card.log")
}

/// Installs the global subscriber, appending to `path`.
///
/// The terminal belongs to the UI, so logs never go to stdout or stderr.
/// Level comes from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(io::Error::other)
}
