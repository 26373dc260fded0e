//! Polling a message file for changes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};

/// What identifies one version of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FileStamp {
    modified: Option<SystemTime>,
    len: u64,
}

/// Checks a file at most once per interval and returns its content when it changed.
#[derive(Debug)]
pub struct FilePoller {
    path: PathBuf,
    interval: Duration,
    last_check: Option<Instant>,
    stamp: Option<FileStamp>,
}

impl FilePoller {
    pub fn new(path: impl Into<PathBuf>, interval: Duration) -> Self {
        Self {
            path: path.into(),
            interval,
            last_check: None,
            stamp: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remember the file's current version so only later changes are reported.
    pub fn prime(&mut self) -> io::Result<()> {
        self.stamp = Some(self.current_stamp()?);
        Ok(())
    }

    /// True when the interval has elapsed since the last check (or nothing was checked yet).
    pub fn is_due(&self, now: Instant) -> bool {
        self.last_check
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval)
    }

    /// Check the file if due. Returns the new content when modification time or length changed.
    pub fn poll(&mut self, now: Instant) -> io::Result<Option<String>> {
        if !self.is_due(now) {
            return Ok(None);
        }
        self.last_check = Some(now);
        self.check()
    }

    /// Check the file right away, ignoring the interval.
    pub fn check(&mut self) -> io::Result<Option<String>> {
        let stamp = self.current_stamp()?;
        if self.stamp == Some(stamp) {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        self.stamp = Some(stamp);
        Ok(Some(content))
    }

    fn current_stamp(&self) -> io::Result<FileStamp> {
        let meta = fs::metadata(&self.path)?;
        Ok(FileStamp {
            modified: meta.modified().ok(),
            len: meta.len(),
        })
    }
}
