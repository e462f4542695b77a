//! CLI subcommands and shared file-I/O glue.

pub mod build;
pub mod colors;
pub mod fetch;
pub mod verify;

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use kin_core::errors::{CatalogError, SnapshotError};

/// Read a required input file with catalog-grade diagnostics.
pub(crate) fn read_input(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        },
    })
}

/// Write a JSON artifact, optionally pretty-printed.
pub(crate) fn write_json<T: serde::Serialize>(
    path: &Path,
    value: &T,
    pretty: bool,
) -> Result<(), SnapshotError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| SnapshotError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    std::fs::write(path, json).map_err(|e| SnapshotError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Current unix time in seconds.
pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
