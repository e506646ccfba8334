// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Fake fetchers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;
use icsfeed_core::{Fetch, FetchError};

/// Serves texts from a map; any other source is not found.
#[derive(Debug, Default)]
pub struct MapFetcher {
    texts: HashMap<String, String>,
}

impl MapFetcher {
    /// Adds a source and its text.
    #[must_use]
    pub fn with(mut self, source: &str, text: impl Into<String>) -> Self {
        self.texts.insert(source.to_string(), text.into());
        self
    }
}

#[async_trait]
impl Fetch for MapFetcher {
    async fn fetch(&self, source: &str) -> Result<String, FetchError> {
        self.texts
            .get(source)
            .cloned()
            .ok_or_else(|| FetchError::NotFound {
                id: source.to_string(),
            })
    }
}

/// Records how many fetches run at the same time; every fetch takes `delay`.
#[derive(Debug)]
pub struct CountingFetcher {
    text: String,
    delay: Duration,
    active: AtomicUsize,
    peak: AtomicUsize,
}

impl CountingFetcher {
    /// Creates a fetcher answering every source with `text`.
    #[must_use]
    pub fn new(text: impl Into<String>, delay: Duration) -> Self {
        Self {
            text: text.into(),
            delay,
            active: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    /// Highest number of fetches observed running at once.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetch for CountingFetcher {
    async fn fetch(&self, _source: &str) -> Result<String, FetchError> {
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.active.fetch_sub(1, Ordering::SeqCst);
        Ok(self.text.clone())
    }
}

/// Answers every source with `text`, but holds back `gated` until [`GatedFetcher::open`].
#[derive(Debug)]
pub struct GatedFetcher {
    text: String,
    gated: String,
    gate: Notify,
}

impl GatedFetcher {
    /// Creates a fetcher that blocks on `gated`.
    #[must_use]
    pub fn new(text: impl Into<String>, gated: &str) -> Self {
        Self {
            text: text.into(),
            gated: gated.to_string(),
            gate: Notify::new(),
        }
    }

    /// Releases the gated source.
    pub fn open(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl Fetch for GatedFetcher {
    async fn fetch(&self, source: &str) -> Result<String, FetchError> {
        if source == self.gated {
            self.gate.notified().await;
        }
        Ok(self.text.clone())
    }
}
