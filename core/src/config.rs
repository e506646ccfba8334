// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;
use std::str::FromStr;

use tokio::fs;

use crate::error::ConfigError;

/// Configuration of the ingestion pipeline.
///
/// Every field has a default, so an empty TOML document is a valid config.
///
/// ```
/// # use icsfeed_core::PipelineConfig;
/// let config: PipelineConfig = r#"
/// max_concurrent_sources = 2
///
/// [fetch]
/// timeout_secs = 5
/// "#
/// .parse()
/// .unwrap();
/// assert_eq!(config.max_concurrent_sources, 2);
/// assert_eq!(config.fetch.timeout_secs, 5);
/// ```
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Maximum number of sources fetched and decoded at the same time. Excess sources wait
    /// for a free slot. `0` disables the limit.
    pub max_concurrent_sources: usize,

    /// Settings of the default fetcher.
    pub fetch: FetchConfig,
}

impl PipelineConfig {
    /// Reads the configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[tracing::instrument]
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        fs::read_to_string(path)
            .await
            .map_err(|error| ConfigError::Io {
                path: path.to_owned(),
                error,
            })?
            .parse()
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_concurrent_sources: default_max_concurrent_sources(),
            fetch: FetchConfig::default(),
        }
    }
}

impl FromStr for PipelineConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

/// Settings of the default fetcher.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,

    /// User agent sent with HTTP requests.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

const fn default_max_concurrent_sources() -> usize {
    8
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("icsfeed/", env!("CARGO_PKG_VERSION")).to_string()
}
