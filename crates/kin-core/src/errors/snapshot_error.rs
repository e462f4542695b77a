//! Snapshot read/write errors.

/// Errors reading or writing a family snapshot artifact.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Snapshot I/O error at {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse snapshot {path}: {message}")]
    ParseError { path: String, message: String },
}
