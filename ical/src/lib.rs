// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Lenient, line-oriented extraction of calendars and events from iCalendar text.
//!
//! This is not a general iCalendar grammar. Each field is extracted textually and falls
//! back to a default when it is absent or malformed, so decoding never fails.
//!
//! ```
//! # use icsfeed_ical::decode_calendar;
//! let src = "\
//! BEGIN:VCALENDAR\r\n\
//! VERSION:2.0\r\n\
//! X-WR-CALNAME:Team\r\n\
//! BEGIN:VEVENT\r\n\
//! UID:standup@example.com\r\n\
//! SUMMARY:Standup\r\n\
//! DTSTART:20230101T090000Z\r\n\
//! DTEND:20230101T091500Z\r\n\
//! END:VEVENT\r\n\
//! END:VCALENDAR\r\n\
//! ";
//! let calendar = decode_calendar("team.ics", src);
//! assert_eq!(calendar.info.name, "Team");
//! assert_eq!(calendar.events.len(), 1);
//! assert_eq!(calendar.events[0].summary, "Standup");
//! ```

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

mod attendee;
mod calendar;
pub mod datetime;
mod event;
pub mod extract;
mod model;
mod tokenizer;

pub use crate::attendee::{attendee_occurrences, decode_attendee, decode_attendees};
pub use crate::calendar::{decode_calendar, decode_calendar_with, decode_header};
pub use crate::event::{decode_event, generate_event_id};
pub use crate::model::{Attendee, Calendar, CalendarInfo, Event};
pub use crate::tokenizer::{Tokens, tokenize};
