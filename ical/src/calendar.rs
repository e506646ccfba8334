// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Whole-calendar decoding.

use std::sync::Arc;

use jiff::tz::TimeZone;

use crate::event::decode_event;
use crate::extract::{extract, unescape_text};
use crate::model::{Calendar, CalendarInfo, Event};
use crate::tokenizer::tokenize;

/// Decodes a calendar and all of its events from raw iCalendar text.
///
/// `source` is the identifier the text was fetched from; it becomes part of the calendar's
/// identity and of every generated event identifier.
#[must_use]
pub fn decode_calendar(source: &str, text: &str) -> Calendar {
    decode_calendar_with(source, text, |_| {})
}

/// Like [`decode_calendar`], handing each event to `sink` as soon as it is decoded.
///
/// Events reach `sink` in the order of their blocks in `text`.
#[tracing::instrument(skip(text, sink), fields(len = text.len()))]
pub fn decode_calendar_with<F>(source: &str, text: &str, mut sink: F) -> Calendar
where
    F: FnMut(&Arc<Event>),
{
    let tokens = tokenize(text);
    let info = Arc::new(decode_header(source, &tokens.header));

    let mut events = Vec::with_capacity(tokens.events.len());
    for block in tokens.events {
        let event = Arc::new(decode_event(block, &info));
        sink(&event);
        events.push(event);
    }

    tracing::debug!(events = events.len(), "decoded calendar");
    Calendar { info, events }
}

/// Decodes the calendar-level properties of a header segment.
#[must_use]
pub fn decode_header(source: &str, header: &str) -> CalendarInfo {
    CalendarInfo {
        source: source.to_owned(),
        name: unescape_text(extract(header, "X-WR-CALNAME")),
        description: unescape_text(extract(header, "X-WR-CALDESC")),
        version: extract(header, "VERSION").parse().unwrap_or(0.0),
        timezone: decode_timezone(extract(header, "X-WR-TIMEZONE")),
        prod_id: extract(header, "PRODID").to_owned(),
        method: extract(header, "METHOD").to_owned(),
    }
}

/// Resolves an IANA zone name, falling back to UTC.
fn decode_timezone(name: &str) -> TimeZone {
    if name.is_empty() {
        return TimeZone::UTC;
    }

    TimeZone::get(name).unwrap_or_else(|err| {
        tracing::warn!(name, %err, "unrecognized calendar timezone, using UTC");
        TimeZone::UTC
    })
}
