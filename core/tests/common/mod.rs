// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Sample .ics contents
//! - Fake fetchers for failure injection and concurrency tracking

mod fetchers;
mod fixtures;

#[allow(unused_imports)]
pub use fetchers::{CountingFetcher, GatedFetcher, MapFetcher};
#[allow(unused_imports)]
pub use fixtures::{ics_with_events, test_config};
