//! File logger for the `log` facade.
//!
//! The terminal is in the alternate screen while the game runs, so log
//! lines go to a file instead. Lines look like
//! `[1234ms] DEBUG tui_blockfall_core::player: piece locked ...` where the
//! timestamp is milliseconds since the logger was installed.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};

pub struct FileLogger {
    file: Mutex<File>,
    level: LevelFilter,
    started: Instant,
}

impl FileLogger {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &Path, level: LevelFilter) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("log: open {} failed", path.display()))?;
        Ok(Self {
            file: Mutex::new(file),
            level,
            started: Instant::now(),
        })
    }

    pub fn format_line(&self, record: &Record) -> String {
        format!(
            "[{}ms] {} {}: {}",
            self.started.elapsed().as_millis(),
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format_line(record);
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", line);
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Install a [`FileLogger`] as the global logger when `path` is set.
///
/// Without a path nothing is installed and every log call is a no-op.
pub fn init(path: Option<&Path>, level: LevelFilter) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let logger = FileLogger::open(path, level)?;
    log::set_boxed_logger(Box::new(logger)).context("log: logger already installed")?;
    log::set_max_level(level);
    Ok(())
}
