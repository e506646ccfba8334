// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Decoded calendar entities.

use std::sync::Arc;

use jiff::Timestamp;
use jiff::tz::TimeZone;
use uuid::Uuid;

/// Calendar-level metadata decoded from the header segment of a source.
///
/// Immutable once decoded, and shared between the [`Calendar`] and each of its events.
#[derive(Debug, Clone)]
pub struct CalendarInfo {
    /// Identifier of the source the calendar was decoded from (URL or local path).
    pub source: String,

    /// Calendar name, from `X-WR-CALNAME`.
    pub name: String,

    /// Calendar description, from `X-WR-CALDESC`.
    pub description: String,

    /// iCalendar version, `0.0` when absent or unparsable.
    pub version: f64,

    /// Calendar timezone, from `X-WR-TIMEZONE`. UTC when absent or unrecognized.
    pub timezone: TimeZone,

    /// Product identifier, from `PRODID`.
    pub prod_id: String,

    /// Scheduling method, from `METHOD`.
    pub method: String,
}

/// A decoded calendar and its events, in source order.
#[derive(Debug, Clone)]
pub struct Calendar {
    /// Header metadata.
    pub info: Arc<CalendarInfo>,

    /// Events owned by this calendar.
    pub events: Vec<Arc<Event>>,
}

impl Calendar {
    /// Source identifier this calendar was decoded from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.info.source
    }
}

/// A decoded `VEVENT`.
///
/// Every field is filled best-effort: an absent property and a malformed one both leave
/// the default value (empty string, zero, or the zero-value instant
/// [`Timestamp::default`]), so the two cases cannot be told apart from the event alone.
/// Nothing guarantees `start <= end`.
#[derive(Debug, Clone)]
pub struct Event {
    /// Identifier derived from the owning calendar's source and [`Event::imported_id`],
    /// stable across runs. See [`crate::generate_event_id`].
    pub id: Uuid,

    /// `UID` as found in the source, possibly empty.
    pub imported_id: String,

    /// `SUMMARY`.
    pub summary: String,

    /// `DESCRIPTION`.
    pub description: String,

    /// `LOCATION`.
    pub location: String,

    /// `STATUS`, e.g. `CONFIRMED`.
    pub status: String,

    /// `CLASS`, e.g. `PUBLIC`.
    pub class: String,

    /// `SEQUENCE`, 0 when absent or unparsable.
    pub sequence: u32,

    /// Mail address of the `ORGANIZER`.
    pub organizer: String,

    /// `DTSTAMP`.
    pub stamp: Timestamp,

    /// `CREATED`.
    pub created: Timestamp,

    /// `LAST-MODIFIED`.
    pub last_modified: Timestamp,

    /// `DTSTART`.
    pub start: Timestamp,

    /// `DTEND`.
    pub end: Timestamp,

    /// True iff both start and end fall on midnight.
    pub whole_day: bool,

    /// `RRULE` as raw text, not expanded.
    pub rrule: String,

    /// Attendees with at least one non-empty field, in source order.
    pub attendees: Vec<Attendee>,

    /// Header of the calendar this event belongs to.
    pub calendar: Arc<CalendarInfo>,
}

/// An `ATTENDEE` of an event. Absent fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attendee {
    /// Address from the `mailto:` value.
    pub email: String,

    /// `CN` parameter.
    pub name: String,

    /// `ROLE` parameter.
    pub role: String,

    /// `PARTSTAT` parameter.
    pub status: String,

    /// `CUTYPE` parameter.
    pub kind: String,
}

impl Attendee {
    /// Whether every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_empty()
            && self.name.is_empty()
            && self.role.is_empty()
            && self.status.is_empty()
            && self.kind.is_empty()
    }
}
