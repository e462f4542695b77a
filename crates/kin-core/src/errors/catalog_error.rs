//! Catalog input errors.
//!
//! The catalog and specification files are the pipeline's primary inputs;
//! failing to read or parse them is fatal at startup.

/// Errors reading or parsing the catalog / specification inputs.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    ParseError { path: String, message: String },
}
