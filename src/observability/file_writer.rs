//! Append-only line writer with size-based rotation.
//!
//! Before each write the current file's size is checked; once it exceeds the
//! limit the file is renamed to `<name>.<micros>` (a `chrono` UTC timestamp)
//! and a fresh file is started. Only the newest backups are kept.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotation threshold used by [`RotatingFileWriter::new`] (10 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Backups retained by [`RotatingFileWriter::new`].
pub const DEFAULT_MAX_BACKUPS: usize = 3;

/// Thread-safe rotating writer; the file is opened lazily on first write.
pub struct RotatingFileWriter {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Mutex<Option<File>>,
}

impl RotatingFileWriter {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_MAX_BACKUPS)
    }

    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is too big.
    ///
    /// # Errors
    ///
    /// Fails on a poisoned lock or any I/O error while rotating, opening,
    /// writing or flushing.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        let oversized = fs::metadata(&self.path).is_ok_and(|m| m.len() > self.max_bytes);
        if oversized {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            *guard = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(file) = guard.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file not open"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn rotate(&self) -> io::Result<()> {
        let mut stamp = Utc::now().timestamp_micros();
        let mut backup = self.backup_path(stamp);
        while backup.exists() {
            stamp += 1;
            backup = self.backup_path(stamp);
        }

        if self.path.exists() {
            fs::rename(&self.path, &backup)?;
        }

        self.prune_backups()
    }

    fn backup_path(&self, stamp: i64) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{stamp}"));
        PathBuf::from(name)
    }

    /// Backups of this file, newest first.
    fn backups(&self) -> io::Result<Vec<(i64, PathBuf)>> {
        let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
        let Some(base) = self.path.file_name().and_then(|n| n.to_str()) else {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "trace file has no name"));
        };
        let prefix = format!("{base}.");

        let mut found: Vec<(i64, PathBuf)> = fs::read_dir(dir)?
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name();
                let stamp = name.to_str()?.strip_prefix(&prefix)?.parse::<i64>().ok()?;
                Some((stamp, entry.path()))
            })
            .collect();

        found.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(found)
    }

    fn prune_backups(&self) -> io::Result<()> {
        for (_, stale) in self.backups()?.into_iter().skip(self.max_backups) {
            // Best effort: a backup we cannot delete should not stop tracing.
            let _ = fs::remove_file(stale);
        }
        Ok(())
    }
}

impl std::fmt::Debug for RotatingFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFileWriter")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("basket-otlp.json");
        let writer = RotatingFileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_and_keeps_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = RotatingFileWriter::with_limits(path.clone(), 10, 2);

        for n in 1..=5 {
            writer.write_line(&format!("line number {n:02}")).unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "line number 05\n");

        let backups = writer.backups().unwrap();
        assert_eq!(backups.len(), 2);
        assert_eq!(fs::read_to_string(&backups[0].1).unwrap(), "line number 04\n");
        assert_eq!(fs::read_to_string(&backups[1].1).unwrap(), "line number 03\n");
    }

    #[test]
    fn unrelated_files_are_not_pruned() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let other = dir.path().join("trace.json.notes");
        fs::write(&other, "keep me").unwrap();

        let writer = RotatingFileWriter::with_limits(path, 1, 0);
        writer.write_line("first").unwrap();
        writer.write_line("second").unwrap();

        assert!(other.exists());
        assert!(writer.backups().unwrap().is_empty());
    }
}
