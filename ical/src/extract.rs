// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Textual extraction of single property and parameter values.
//!
//! Nothing here fails: a value that cannot be found is returned as the empty string, and
//! callers decide what the empty string means for the field they fill.

use std::sync::OnceLock;

use regex::Regex;

/// Returns the value of the first line of `block` shaped like `PROPERTY:value`.
///
/// `property` may carry parameters verbatim, e.g. `DTSTART;VALUE=DATE`, in which case only
/// lines with exactly that prefix match. The match is anchored at the start of a line and is
/// case-sensitive. Surrounding whitespace, including a trailing `\r`, is trimmed.
///
/// ```
/// # use icsfeed_ical::extract::extract;
/// let block = "BEGIN:VEVENT\r\nSUMMARY: Standup \r\nEND:VEVENT\r\n";
/// assert_eq!(extract(block, "SUMMARY"), "Standup");
/// assert_eq!(extract(block, "LOCATION"), "");
/// ```
#[must_use]
pub fn extract<'a>(block: &'a str, property: &str) -> &'a str {
    block
        .lines()
        .find_map(|line| line.strip_prefix(property)?.strip_prefix(':'))
        .map_or("", str::trim)
}

/// Returns the first line of `block` that starts with `prefix`, without its line ending.
#[must_use]
pub fn find_line<'a>(block: &'a str, prefix: &str) -> Option<&'a str> {
    block
        .lines()
        .find(|line| line.starts_with(prefix))
        .map(|line| line.trim_end_matches('\r'))
}

/// Returns the value of the parameter `name` (as in `;NAME=value`) on a property line.
///
/// The value is bounded by the next `;`, or by the `:` that separates parameters from the
/// property value. Double quotes around the value are removed.
///
/// ```
/// # use icsfeed_ical::extract::extract_param;
/// let line = r#"ATTENDEE;ROLE=CHAIR;CN="Doe, Jane":mailto:jane@example.com"#;
/// assert_eq!(extract_param(line, "ROLE"), "CHAIR");
/// assert_eq!(extract_param(line, "CN"), "Doe, Jane");
/// assert_eq!(extract_param(line, "PARTSTAT"), "");
/// ```
#[must_use]
pub fn extract_param<'a>(line: &'a str, name: &str) -> &'a str {
    const RE: &str = r#"(?:^|;)(?<name>[A-Za-z0-9-]+)=(?<value>"[^"]*"|[^;:\r\n]*)"#;
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());

    re.captures_iter(line)
        .find(|caps| caps["name"].eq_ignore_ascii_case(name))
        .and_then(|caps| caps.name("value"))
        .map_or("", |m| m.as_str().trim().trim_matches('"').trim())
}

/// Returns the value part of a property line, after the first `:` outside double quotes.
///
/// Quoted parameter values may themselves contain `:`, as in `SENT-BY="mailto:a@x.org"`.
/// A line without such a separator has no value and yields the empty string.
///
/// ```
/// # use icsfeed_ical::extract::property_value;
/// let line = r#"ORGANIZER;SENT-BY="mailto:a@x.org":mailto:b@x.org"#;
/// assert_eq!(property_value(line), "mailto:b@x.org");
/// ```
#[must_use]
pub fn property_value(line: &str) -> &str {
    let mut quoted = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => quoted = !quoted,
            ':' if !quoted => return line.get(i + 1..).unwrap_or_default(),
            _ => {}
        }
    }
    ""
}

/// Returns the address following the `mailto:` scheme of the property value, or the empty
/// string.
///
/// Parameters are skipped, so addresses in `SENT-BY`, `DELEGATED-FROM` and the like never
/// leak into the result.
#[must_use]
pub fn extract_mailto(line: &str) -> &str {
    const RE: &str = r"(?i)^\s*mailto:(?<addr>[^\s;]+)";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());

    re.captures(property_value(line))
        .and_then(|caps| caps.name("addr"))
        .map_or("", |m| m.as_str())
}

/// Returns the raw text of each `name` property in `block`, in order, together with the
/// whitespace-prefixed continuation lines that follow it.
// Offsets come from `split_inclusive`, so every slice is on a line boundary.
#[allow(clippy::indexing_slicing)]
#[must_use]
pub fn occurrences<'a>(block: &'a str, name: &str) -> Vec<&'a str> {
    let mut found = Vec::new();
    let mut open: Option<usize> = None;
    let mut end = 0;
    let mut offset = 0;

    for line in block.split_inclusive('\n') {
        let start = offset;
        offset += line.len();

        if open.is_some() && line.starts_with([' ', '\t']) {
            end = offset;
            continue;
        }

        if let Some(begin) = open.take() {
            found.push(&block[begin..end]);
        }

        if line
            .strip_prefix(name)
            .is_some_and(|rest| rest.starts_with([';', ':']))
        {
            open = Some(start);
            end = offset;
        }
    }

    if let Some(begin) = open {
        found.push(&block[begin..end]);
    }
    found
}

/// Joins folded lines (RFC 5545 Section 3.1) into one logical line.
#[must_use]
pub fn unfold(raw: &str) -> String {
    let mut line = String::with_capacity(raw.len());
    for part in raw.lines() {
        line.push_str(part.strip_prefix([' ', '\t']).unwrap_or(part));
    }
    line
}

/// Decodes the backslash escapes of a TEXT value (RFC 5545 Section 3.3.11).
///
/// Unknown escapes are kept as they are.
#[must_use]
pub fn unescape_text(value: &str) -> String {
    if !value.contains('\\') {
        return value.to_owned();
    }

    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('n' | 'N') => out.push('\n'),
            Some(c @ (',' | ';' | '\\')) => out.push(c),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
