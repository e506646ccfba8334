// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Concurrent ingestion of iCalendar sources.
//!
//! A [`Pipeline`] accepts source identifiers (URLs or local paths), fetches and decodes
//! each one in its own task, and streams the decoded events through a single output queue.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::missing_panics_doc)]

mod config;
mod error;
mod fetch;
mod pipeline;

pub use crate::config::{FetchConfig, PipelineConfig};
pub use crate::error::{ConfigError, FetchError, PipelineError};
pub use crate::fetch::{Fetch, SourceFetcher};
pub use crate::pipeline::Pipeline;

pub use icsfeed_ical::{Attendee, Calendar, CalendarInfo, Event};
