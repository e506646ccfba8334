// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! `VEVENT` block decoding.

use std::sync::Arc;

use uuid::Uuid;

use crate::attendee::decode_attendees;
use crate::datetime::{decode_instant, is_midnight};
use crate::extract::{extract, extract_mailto, occurrences, unescape_text, unfold};
use crate::model::{CalendarInfo, Event};

/// Namespace of the UUIDv5 event identifiers.
const EVENT_ID_NAMESPACE: Uuid = Uuid::from_u128(0x6c0f_5d2e_9a41_4b7e_8f3a_1d2c_0e9b_7a51);

/// Derives the identifier of an event from its calendar's source and its imported `UID`.
///
/// The identifier is a UUIDv5 over `source` and `imported_id` joined by a newline, so the
/// same pair yields the same identifier in every run and every process. Events of one
/// calendar that share a `UID` (including the empty one) share the identifier.
#[must_use]
pub fn generate_event_id(source: &str, imported_id: &str) -> Uuid {
    let name = format!("{source}\n{imported_id}");
    Uuid::new_v5(&EVENT_ID_NAMESPACE, name.as_bytes())
}

/// Decodes one event block, from `BEGIN:VEVENT` to `END:VEVENT`.
///
/// Properties are looked up independently of each other and of their order. The event is
/// only built here; publishing it is up to the caller.
#[must_use]
pub fn decode_event(block: &str, calendar: &Arc<CalendarInfo>) -> Event {
    let start = decode_instant(block, "DTSTART");
    let end = decode_instant(block, "DTEND");
    let imported_id = extract(block, "UID").to_owned();

    Event {
        id: generate_event_id(&calendar.source, &imported_id),
        imported_id,
        summary: unescape_text(extract(block, "SUMMARY")),
        description: unescape_text(extract(block, "DESCRIPTION")),
        location: unescape_text(extract(block, "LOCATION")),
        status: extract(block, "STATUS").to_owned(),
        class: extract(block, "CLASS").to_owned(),
        sequence: extract(block, "SEQUENCE").parse().unwrap_or(0),
        organizer: occurrences(block, "ORGANIZER")
            .first()
            .map(|raw| extract_mailto(&unfold(raw)).to_owned())
            .unwrap_or_default(),
        stamp: decode_instant(block, "DTSTAMP"),
        created: decode_instant(block, "CREATED"),
        last_modified: decode_instant(block, "LAST-MODIFIED"),
        start,
        end,
        whole_day: is_midnight(start) && is_midnight(end),
        rrule: extract(block, "RRULE").to_owned(),
        attendees: decode_attendees(block),
        calendar: Arc::clone(calendar),
    }
}
