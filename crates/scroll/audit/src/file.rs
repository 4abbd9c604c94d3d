use crate::error::{AuditError, AuditResult};
use crate::AuditSink;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Ceremony log written when no other path is configured.
pub const DEFAULT_LOG_FILE: &str = "ceremony_log.txt";

/// Append-only ceremony log, one event per line.
///
/// Write failures are reported through `tracing` and otherwise swallowed:
/// a broken log destination never changes a certification outcome.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: File,
    timestamps: bool,
}

impl FileSink {
    /// Open (creating if needed) the log at `path` for appending.
    pub fn open(path: impl AsRef<Path>) -> AuditResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| AuditError::Io {
                path: path.clone(),
                source,
            })?;
        Ok(Self {
            path,
            file,
            timestamps: true,
        })
    }

    /// Prefix each line with an RFC 3339 UTC timestamp (on by default).
    pub fn with_timestamps(mut self, timestamps: bool) -> Self {
        self.timestamps = timestamps;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AuditSink for FileSink {
    fn record(&mut self, message: &str) {
        let result = if self.timestamps {
            let now = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
            writeln!(self.file, "[{}] {}", now, message)
        } else {
            writeln!(self.file, "{}", message)
        };
        if let Err(e) = result {
            warn!(path = %self.path.display(), error = %e, "Failed to append to ceremony log");
        }
    }
}

/// Read the whole ceremony log.
pub fn read_log(path: impl AsRef<Path>) -> AuditResult<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => AuditError::LogNotFound(path.to_path_buf()),
        _ => AuditError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}
