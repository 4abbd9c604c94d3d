//! Audit error types

use std::path::PathBuf;
use thiserror::Error;

/// Audit log errors
#[derive(Debug, Error)]
pub enum AuditError {
    /// The ceremony log has never been written
    #[error("Ceremony log file not found: {}", .0.display())]
    LogNotFound(PathBuf),

    /// The ceremony log exists but could not be opened or read
    #[error("Error accessing ceremony log {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for audit operations
pub type AuditResult<T> = Result<T, AuditError>;
