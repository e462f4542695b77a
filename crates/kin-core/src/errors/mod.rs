//! Error handling for kin.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod catalog_error;
pub mod config_error;
pub mod fetch_error;
pub mod pipeline_error;
pub mod snapshot_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use fetch_error::FetchError;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use snapshot_error::SnapshotError;
