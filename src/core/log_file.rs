//! # Log File
//!
//! The append-only text log behind the `log` facade, and the read/clear
//! operations the log viewer needs. Logging must never take a screen down,
//! so reads degrade to empty text and failures are only reported.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use log::{Level, warn};

/// Open (creating if needed) the log file for appending.
pub fn open_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Whole log content. Missing file reads as empty.
pub fn read_logs(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            warn!("Failed to read logs from {}: {}", path.display(), e);
            String::new()
        }
    }
}

/// Truncate the log file to zero length.
///
/// The logger holds its handle in append mode, so later records land at the
/// new end of file.
pub fn clear_logs(path: &Path) -> io::Result<()> {
    OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)
        .map(|_| ())
}

/// Severity tag of a formatted log line (`[INFO]`, `[WARN]`...), if any.
pub fn line_level(line: &str) -> Option<Level> {
    [
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ]
    .into_iter()
    .find(|level| line.contains(&format!("[{}]", level.as_str())))
}
