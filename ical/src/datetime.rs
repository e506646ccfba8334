// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Decoding of DATE and DATE-TIME property values into instants.

use jiff::Timestamp;
use jiff::civil::{Date, DateTime, Time};
use jiff::tz::TimeZone;

use crate::extract::{extract, extract_param, find_line};

/// Decodes the instant of a date or date-time property such as `DTSTART`.
///
/// The property is looked up in three shapes, in order:
///
/// 1. `PROPERTY;VALUE=DATE:YYYYMMDD`, midnight UTC of that date;
/// 2. `PROPERTY:YYYYMMDDTHHMMSS[Z]`, read as UTC;
/// 3. `PROPERTY;TZID=Zone/Name:YYYYMMDDTHHMMSS`, resolved in the named zone, or in UTC
///    when the zone is unknown.
///
/// Anything absent or malformed decodes to the zero-value instant,
/// [`Timestamp::default`], so a broken timestamp never aborts the surrounding event.
#[must_use]
pub fn decode_instant(block: &str, property: &str) -> Timestamp {
    let whole_day = extract(block, &format!("{property};VALUE=DATE"));
    if !whole_day.is_empty() {
        return parse_date(whole_day)
            .and_then(|date| date.to_zoned(TimeZone::UTC).ok())
            .map(|zoned| zoned.timestamp())
            .unwrap_or_default();
    }

    let plain = extract(block, property);
    if !plain.is_empty() {
        return parse_date_time(plain, TimeZone::UTC).unwrap_or_default();
    }

    find_line(block, &format!("{property};TZID="))
        .and_then(|line| {
            let (params, value) = line.split_once(':')?;
            let tz = TimeZone::get(extract_param(params, "TZID")).unwrap_or(TimeZone::UTC);
            parse_date_time(value.trim(), tz)
        })
        .unwrap_or_default()
}

/// Whether the instant falls exactly on midnight, UTC.
#[must_use]
pub fn is_midnight(instant: Timestamp) -> bool {
    instant.to_zoned(TimeZone::UTC).time() == Time::midnight()
}

/// Parses a `YYYYMMDD` date value.
fn parse_date(value: &str) -> Option<Date> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let year = value.get(0..4)?.parse().ok()?;
    let month = value.get(4..6)?.parse().ok()?;
    let day = value.get(6..8)?.parse().ok()?;
    Date::new(year, month, day).ok()
}

/// Parses a `HHMMSS` time value. A leap second is clamped to 59.
fn parse_time(value: &str) -> Option<Time> {
    if value.len() != 6 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hour = value.get(0..2)?.parse().ok()?;
    let minute = value.get(2..4)?.parse().ok()?;
    let second: i8 = value.get(4..6)?.parse().ok()?;
    Time::new(hour, minute, second.min(59), 0).ok()
}

/// Parses a `YYYYMMDDTHHMMSS[Z]` date-time value. A `Z` suffix always means UTC,
/// otherwise the value is a wall-clock time in `tz`.
fn parse_date_time(value: &str, tz: TimeZone) -> Option<Timestamp> {
    let (value, tz) = match value.strip_suffix('Z') {
        Some(utc) => (utc, TimeZone::UTC),
        None => (value, tz),
    };

    let (date, time) = value.split_once('T')?;
    let datetime: DateTime = parse_date(date)?.to_datetime(parse_time(time)?);
    datetime.to_zoned(tz).ok().map(|zoned| zoned.timestamp())
}
