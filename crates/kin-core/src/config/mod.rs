//! Configuration system for kin.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod fetch_config;
pub mod kin_config;
pub mod pipeline_config;

pub use fetch_config::FetchConfig;
pub use kin_config::{CliOverrides, KinConfig};
pub use pipeline_config::PipelineConfig;
