// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Splits calendar text into its header segment and its event blocks.

/// Calendar text split into header and events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens<'src> {
    /// The source text with every event block removed.
    pub header: String,

    /// Event blocks, `BEGIN:VEVENT` through `END:VEVENT` inclusive, in source order.
    pub events: Vec<&'src str>,
}

/// Splits `text` into the header segment and the ordered list of event blocks.
///
/// A block runs from a `BEGIN:VEVENT` line to the next `END:VEVENT` line, across any number
/// of interior lines. A `BEGIN:VEVENT` that is not closed before the next `BEGIN:VEVENT` or
/// the end of input is not a block; its lines stay in the header and do not affect the
/// blocks that follow.
///
/// ```
/// # use icsfeed_ical::tokenize;
/// let text = "BEGIN:VCALENDAR\nBEGIN:VEVENT\nUID:1\nEND:VEVENT\nEND:VCALENDAR\n";
/// let tokens = tokenize(text);
/// assert_eq!(tokens.events, vec!["BEGIN:VEVENT\nUID:1\nEND:VEVENT\n"]);
/// assert_eq!(tokens.header, "BEGIN:VCALENDAR\nEND:VCALENDAR\n");
/// ```
// Offsets come from `split_inclusive`, so every slice is on a line boundary.
#[allow(clippy::indexing_slicing)]
#[must_use]
pub fn tokenize(text: &str) -> Tokens<'_> {
    let mut header = String::with_capacity(text.len());
    let mut events = Vec::new();

    let mut open: Option<usize> = None;
    let mut copied = 0; // text before this offset is already in `header` or `events`
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let start = offset;
        offset += line.len();

        match line.trim_end() {
            "BEGIN:VEVENT" => open = Some(start),
            "END:VEVENT" => {
                if let Some(begin) = open.take() {
                    header.push_str(&text[copied..begin]);
                    events.push(&text[begin..offset]);
                    copied = offset;
                }
            }
            _ => {}
        }
    }

    header.push_str(&text[copied..]);
    Tokens { header, events }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_events() {
        let text = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n";
        let tokens = tokenize(text);
        assert!(tokens.events.is_empty());
        assert_eq!(tokens.header, text);
    }

    #[test]
    fn keeps_order_and_interior_lines() {
        let text = "\
BEGIN:VCALENDAR\r
X-WR-CALNAME:Team\r
BEGIN:VEVENT\r
UID:1\r
BEGIN:VALARM\r
ACTION:DISPLAY\r
END:VALARM\r
END:VEVENT\r
BEGIN:VEVENT\r
UID:2\r
END:VEVENT\r
END:VCALENDAR\r
";
        let tokens = tokenize(text);
        assert_eq!(tokens.events.len(), 2);
        assert!(tokens.events[0].starts_with("BEGIN:VEVENT\r\nUID:1\r\n"));
        assert!(tokens.events[0].contains("END:VALARM\r\n"));
        assert!(tokens.events[0].ends_with("END:VEVENT\r\n"));
        assert_eq!(tokens.events[1], "BEGIN:VEVENT\r\nUID:2\r\nEND:VEVENT\r\n");
        assert_eq!(
            tokens.header,
            "BEGIN:VCALENDAR\r\nX-WR-CALNAME:Team\r\nEND:VCALENDAR\r\n"
        );
    }

    #[test]
    fn unterminated_block_is_skipped() {
        let text = "\
BEGIN:VCALENDAR\r
BEGIN:VEVENT\r
UID:broken\r
BEGIN:VEVENT\r
UID:ok\r
END:VEVENT\r
END:VCALENDAR\r
";
        let tokens = tokenize(text);
        assert_eq!(tokens.events, vec!["BEGIN:VEVENT\r\nUID:ok\r\nEND:VEVENT\r\n"]);
        assert!(tokens.header.contains("UID:broken"));
        assert!(!tokens.header.contains("UID:ok"));
    }

    #[test]
    fn unterminated_trailing_block_is_skipped() {
        let text = "BEGIN:VEVENT\nUID:1\nEND:VEVENT\nBEGIN:VEVENT\nUID:2\n";
        let tokens = tokenize(text);
        assert_eq!(tokens.events, vec!["BEGIN:VEVENT\nUID:1\nEND:VEVENT\n"]);
        assert_eq!(tokens.header, "BEGIN:VEVENT\nUID:2\n");
    }

    #[test]
    fn stray_end_is_ignored() {
        let text = "END:VEVENT\nBEGIN:VEVENT\nUID:1\nEND:VEVENT";
        let tokens = tokenize(text);
        assert_eq!(tokens.events, vec!["BEGIN:VEVENT\nUID:1\nEND:VEVENT"]);
        assert_eq!(tokens.header, "END:VEVENT\n");
    }
}
