// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Retrieval of the raw text behind a source identifier.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use tokio::fs;

use crate::config::FetchConfig;
use crate::error::FetchError;

/// Retrieves the raw iCalendar text of a source.
///
/// Implementations own timeouts and retries; the pipeline calls [`Fetch::fetch`] exactly
/// once per accepted source.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Returns the full text behind `source`.
    ///
    /// # Errors
    ///
    /// Returns an error tagged with `source` if the text cannot be retrieved.
    async fn fetch(&self, source: &str) -> Result<String, FetchError>;
}

/// Default fetcher: HTTP(S) URLs are downloaded, anything else is read as a local path.
#[derive(Debug, Clone)]
pub struct SourceFetcher {
    client: Client,
}

impl SourceFetcher {
    /// Creates a fetcher with the given HTTP settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client })
    }

    async fn fetch_url(&self, url: &str) -> Result<String, FetchError> {
        let http = |error| FetchError::Http {
            id: url.to_owned(),
            error,
        };

        let resp = self.client.get(url).send().await.map_err(http)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                id: url.to_owned(),
                status,
            });
        }

        resp.text().await.map_err(http)
    }
}

#[async_trait]
impl Fetch for SourceFetcher {
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, source: &str) -> Result<String, FetchError> {
        if is_url(source) {
            tracing::debug!("downloading source");
            self.fetch_url(source).await
        } else {
            tracing::debug!("reading local source");
            read_file(source, &expand_path(source)).await
        }
    }
}

/// Whether the source identifier is an HTTP(S) URL.
fn is_url(source: &str) -> bool {
    const RE: &str = r"(?i)^https?://";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());
    re.is_match(source)
}

async fn read_file(source: &str, path: &Path) -> Result<String, FetchError> {
    match fs::read(path).await {
        Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Err(FetchError::NotFound {
            id: source.to_owned(),
        }),
        Err(error) => Err(FetchError::Io {
            id: source.to_owned(),
            error,
        }),
    }
}

/// Handle tilde (~) and the home variable in a local source path.
fn expand_path(source: &str) -> PathBuf {
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };

    for prefix in home_prefixes {
        if let Some(stripped) = source.strip_prefix(prefix) {
            match dirs::home_dir() {
                Some(home) => return home.join(stripped),
                None => tracing::warn!(source, "home directory not found, using path as is"),
            }
        }
    }

    source.into()
}
