// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use icsfeed_core::PipelineConfig;

/// Builds a calendar named `name` with one timed event per UID, in the given order.
///
/// # Example
///
/// ```ignore
/// let ics = ics_with_events("Team", &["a", "b"]);
/// ```
#[must_use]
pub fn ics_with_events(name: &str, uids: &[&str]) -> String {
    let mut ics = format!(
        "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//icsfeed//Test//EN\r\nX-WR-CALNAME:{name}\r\n"
    );
    for uid in uids {
        ics.push_str(&format!(
            "BEGIN:VEVENT\r\n\
             UID:{uid}\r\n\
             SUMMARY:{name} {uid}\r\n\
             DTSTART:20250115T100000Z\r\n\
             DTEND:20250115T110000Z\r\n\
             END:VEVENT\r\n"
        ));
    }
    ics.push_str("END:VCALENDAR\r\n");
    ics
}

/// Creates a pipeline configuration with the given concurrency limit.
#[must_use]
pub fn test_config(max_concurrent_sources: usize) -> PipelineConfig {
    PipelineConfig {
        max_concurrent_sources,
        ..Default::default()
    }
}
