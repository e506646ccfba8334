// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

/// Failure to retrieve the raw text of one source.
///
/// Every variant carries the identifier of the source that failed.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The local file does not exist.
    #[error("Source not found: {id}")]
    NotFound {
        /// Source identifier.
        id: String,
    },

    /// Reading the local file failed.
    #[error("Failed to read source {id}: {error}")]
    Io {
        /// Source identifier.
        id: String,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// The HTTP request failed before a response was received, or its body was unreadable.
    #[error("HTTP request for source {id} failed: {error}")]
    Http {
        /// Source identifier.
        id: String,
        /// Underlying HTTP client error.
        #[source]
        error: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("HTTP request for source {id} returned {status}")]
    Status {
        /// Source identifier.
        id: String,
        /// Response status code.
        status: reqwest::StatusCode,
    },
}

impl FetchError {
    /// Identifier of the source that failed.
    #[must_use]
    pub fn source_id(&self) -> &str {
        match self {
            Self::NotFound { id }
            | Self::Io { id, .. }
            | Self::Http { id, .. }
            | Self::Status { id, .. } => id,
        }
    }
}

/// Errors of the pipeline's synchronous accessors and construction.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Sources are still being fetched or decoded.
    #[error("Calendars not parsed: {in_flight} source(s) still in flight")]
    NotDone {
        /// Number of sources accepted but not yet finished.
        in_flight: usize,
    },

    /// The default HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Errors loading a [`crate::PipelineConfig`].
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file at {}: {error}", path.display())]
    Io {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// The config is not valid TOML or does not match the expected shape.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
