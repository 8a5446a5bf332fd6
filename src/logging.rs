//! Logging setup
//!
//! The terminal is in raw mode on the alternate screen while the app runs,
//! so log lines go to a file in the platform data dir instead of stderr.

use anyhow::Result;
use directories::ProjectDirs;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{writer::BoxMakeWriter, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Name of the log file inside the log directory
pub const LOG_FILE_NAME: &str = "pizza-tui.log";

/// Filter used when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "pizza_tui=info";

/// Directory holding the log file
pub fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from("io", "pizza", "pizza-tui").map(|dirs| dirs.data_local_dir().to_path_buf())
}

/// Open (or create) the log file in `dir` for appending
pub fn open_log_file(dir: &Path) -> Result<File> {
    fs::create_dir_all(dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))?;
    Ok(file)
}

/// Build the subscriber writing formatted events to `writer`
pub fn subscriber<W>(writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer),
    )
}

/// Install the global subscriber. Logging is discarded when no data dir exists.
pub fn init() -> Result<Option<PathBuf>> {
    let (writer, path) = match log_dir() {
        Some(dir) => {
            let file = open_log_file(&dir)?;
            (
                BoxMakeWriter::new(Mutex::new(file)),
                Some(dir.join(LOG_FILE_NAME)),
            )
        }
        None => (BoxMakeWriter::new(std::io::sink), None),
    };
    subscriber(writer).init();
    Ok(path)
}
