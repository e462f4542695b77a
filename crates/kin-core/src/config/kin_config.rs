//! Top-level kin configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{FetchConfig, PipelineConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`KIN_*`)
/// 3. Project config (`kin.toml` in the working directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KinConfig {
    pub pipeline: PipelineConfig,
    pub fetch: FetchConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub fetch_base_url: Option<String>,
    pub fetch_concurrency: Option<usize>,
    pub fetch_retry_attempts: Option<u32>,
    pub pipeline_min_family_size: Option<usize>,
}

impl KinConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join("kin.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &KinConfig) -> Result<(), ConfigError> {
        if let Some(size) = config.pipeline.min_family_size {
            if size < 2 {
                return Err(ConfigError::ValidationFailed {
                    field: "pipeline.min_family_size".to_string(),
                    message: "must be at least 2".to_string(),
                });
            }
        }
        if let Some(concurrency) = config.fetch.concurrency {
            if concurrency == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "fetch.concurrency".to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
        }
        if let Some(attempts) = config.fetch.retry_attempts {
            if attempts == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "fetch.retry_attempts".to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
        }
        if let Some(interval) = config.fetch.checkpoint_interval {
            if interval == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "fetch.checkpoint_interval".to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut KinConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: KinConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a `Some` value.
    fn merge(base: &mut KinConfig, other: &KinConfig) {
        if other.pipeline.min_family_size.is_some() {
            base.pipeline.min_family_size = other.pipeline.min_family_size;
        }
        if other.pipeline.pretty_json.is_some() {
            base.pipeline.pretty_json = other.pipeline.pretty_json;
        }

        if other.fetch.base_url.is_some() {
            base.fetch.base_url = other.fetch.base_url.clone();
        }
        if other.fetch.concurrency.is_some() {
            base.fetch.concurrency = other.fetch.concurrency;
        }
        if other.fetch.retry_attempts.is_some() {
            base.fetch.retry_attempts = other.fetch.retry_attempts;
        }
        if other.fetch.retry_delay_ms.is_some() {
            base.fetch.retry_delay_ms = other.fetch.retry_delay_ms;
        }
        if other.fetch.checkpoint_interval.is_some() {
            base.fetch.checkpoint_interval = other.fetch.checkpoint_interval;
        }
        if other.fetch.timeout_secs.is_some() {
            base.fetch.timeout_secs = other.fetch.timeout_secs;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `KIN_FETCH_CONCURRENCY`, `KIN_PIPELINE_MIN_FAMILY_SIZE`, etc.
    fn apply_env_overrides(config: &mut KinConfig) {
        if let Ok(val) = std::env::var("KIN_FETCH_BASE_URL") {
            config.fetch.base_url = Some(val);
        }
        if let Ok(val) = std::env::var("KIN_FETCH_CONCURRENCY") {
            if let Ok(v) = val.parse::<usize>() {
                config.fetch.concurrency = Some(v);
            }
        }
        if let Ok(val) = std::env::var("KIN_FETCH_RETRY_ATTEMPTS") {
            if let Ok(v) = val.parse::<u32>() {
                config.fetch.retry_attempts = Some(v);
            }
        }
        if let Ok(val) = std::env::var("KIN_FETCH_RETRY_DELAY_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.fetch.retry_delay_ms = Some(v);
            }
        }
        if let Ok(val) = std::env::var("KIN_FETCH_CHECKPOINT_INTERVAL") {
            if let Ok(v) = val.parse::<usize>() {
                config.fetch.checkpoint_interval = Some(v);
            }
        }
        if let Ok(val) = std::env::var("KIN_PIPELINE_MIN_FAMILY_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.pipeline.min_family_size = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut KinConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.fetch_base_url {
            config.fetch.base_url = Some(v.clone());
        }
        if let Some(v) = cli.fetch_concurrency {
            config.fetch.concurrency = Some(v);
        }
        if let Some(v) = cli.fetch_retry_attempts {
            config.fetch.retry_attempts = Some(v);
        }
        if let Some(v) = cli.pipeline_min_family_size {
            config.pipeline.min_family_size = Some(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = KinConfig::default();
        assert!(KinConfig::validate(&config).is_ok());
        assert_eq!(config.pipeline.effective_min_family_size(), 2);
        assert_eq!(config.fetch.effective_concurrency(), 10);
        assert_eq!(config.fetch.effective_retry_attempts(), 3);
    }

    #[test]
    fn from_toml_overrides_defaults() {
        let config = KinConfig::from_toml(
            r#"
            [fetch]
            concurrency = 4
            retry_delay_ms = 250

            [pipeline]
            pretty_json = false
            "#,
        )
        .unwrap();
        assert_eq!(config.fetch.effective_concurrency(), 4);
        assert_eq!(
            config.fetch.effective_retry_delay(),
            std::time::Duration::from_millis(250)
        );
        assert!(!config.pipeline.effective_pretty_json());
    }

    #[test]
    fn zero_concurrency_rejected() {
        let config = KinConfig::from_toml("[fetch]\nconcurrency = 0\n").unwrap();
        let err = KinConfig::validate(&config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed { .. }));
    }

    #[test]
    fn min_family_size_below_two_rejected() {
        let config = KinConfig::from_toml("[pipeline]\nmin_family_size = 1\n").unwrap();
        assert!(KinConfig::validate(&config).is_err());
    }

    #[test]
    fn cli_overrides_win() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("kin.toml"), "[fetch]\nconcurrency = 4\n").unwrap();
        let cli = CliOverrides {
            fetch_concurrency: Some(2),
            ..Default::default()
        };
        let config = KinConfig::load(dir.path(), Some(&cli)).unwrap();
        assert_eq!(config.fetch.effective_concurrency(), 2);
    }
}
