// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! `ATTENDEE` property decoding.

use crate::extract::{extract_mailto, extract_param, occurrences, unfold};
use crate::model::Attendee;

/// Decodes one attendee occurrence, including its folded continuation lines.
///
/// The occurrence is unfolded into a single logical line first. Fields that cannot be found
/// stay empty; the result may therefore be [`Attendee::is_empty`].
///
/// ```
/// # use icsfeed_ical::decode_attendee;
/// let raw = "ATTENDEE;ROLE=REQ-PARTICIPANT;CN=Jane Doe:mailto:jane@exa\r\n mple.com\r\n";
/// let attendee = decode_attendee(raw);
/// assert_eq!(attendee.name, "Jane Doe");
/// assert_eq!(attendee.email, "jane@example.com");
/// ```
#[must_use]
pub fn decode_attendee(raw: &str) -> Attendee {
    let line = unfold(raw);
    Attendee {
        email: extract_mailto(&line).to_owned(),
        name: extract_param(&line, "CN").to_owned(),
        role: extract_param(&line, "ROLE").to_owned(),
        status: extract_param(&line, "PARTSTAT").to_owned(),
        kind: extract_param(&line, "CUTYPE").to_owned(),
    }
}

/// Decodes every attendee of an event block, dropping the ones with no field at all.
#[must_use]
pub fn decode_attendees(block: &str) -> Vec<Attendee> {
    attendee_occurrences(block)
        .into_iter()
        .map(decode_attendee)
        .filter(|a| !a.is_empty())
        .collect()
}

/// Returns the raw text of each `ATTENDEE` occurrence in `block`, in order, together with the
/// whitespace-prefixed continuation lines that follow it.
#[must_use]
pub fn attendee_occurrences(block: &str) -> Vec<&str> {
    occurrences(block, "ATTENDEE")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_all_parameters() {
        let raw = "ATTENDEE;CUTYPE=INDIVIDUAL;ROLE=REQ-PARTICIPANT;PARTSTAT=ACCEPTED;CN=Jane Doe;X-NUM-GUESTS=0:mailto:jane@example.com\r\n";
        let attendee = decode_attendee(raw);
        assert_eq!(
            attendee,
            Attendee {
                email: "jane@example.com".to_string(),
                name: "Jane Doe".to_string(),
                role: "REQ-PARTICIPANT".to_string(),
                status: "ACCEPTED".to_string(),
                kind: "INDIVIDUAL".to_string(),
            }
        );
    }

    #[test]
    fn only_common_name() {
        let attendee = decode_attendee("ATTENDEE;CN=Jane Doe;:\r\n");
        assert_eq!(attendee.name, "Jane Doe");
        assert!(attendee.email.is_empty());
        assert!(attendee.role.is_empty());
        assert!(attendee.status.is_empty());
        assert!(attendee.kind.is_empty());
    }

    #[test]
    fn unrecognized_attendee_is_empty() {
        assert!(decode_attendee("ATTENDEE:urn:uuid:1234\r\n").is_empty());
    }

    #[test]
    fn unfolds_continuations_before_extraction() {
        let raw = "ATTENDEE;CUTYPE=INDIVIDUAL;ROLE=REQ-PARTICIPANT;PARTSTAT=NEEDS-ACTION;CN=lon\r\n g name;X-NUM-GUESTS=0:mailto:someone@\r\n\texample.com\r\n";
        let attendee = decode_attendee(raw);
        assert_eq!(attendee.name, "long name");
        assert_eq!(attendee.status, "NEEDS-ACTION");
        assert_eq!(attendee.email, "someone@example.com");
    }

    #[test]
    fn occurrences_include_continuations() {
        let block = "BEGIN:VEVENT\r\nATTENDEE;CN=A:mailto:a@x.org\r\nATTENDEE;CN=B:mailto:b@\r\n x.org\r\nSUMMARY:S\r\nEND:VEVENT\r\n";
        let found = attendee_occurrences(block);
        assert_eq!(
            found,
            vec![
                "ATTENDEE;CN=A:mailto:a@x.org\r\n",
                "ATTENDEE;CN=B:mailto:b@\r\n x.org\r\n",
            ]
        );
    }

    #[test]
    fn occurrence_at_end_of_block() {
        let found = attendee_occurrences("SUMMARY:S\nATTENDEE:mailto:a@x.org");
        assert_eq!(found, vec!["ATTENDEE:mailto:a@x.org"]);
    }

    #[test]
    fn email_ignores_delegated_from() {
        let raw = "ATTENDEE;DELEGATED-FROM=\"mailto:boss@x.org\";CN=Jane:mailto:jane@x.org\r\n";
        let attendee = decode_attendee(raw);
        assert_eq!(attendee.email, "jane@x.org");
        assert_eq!(attendee.name, "Jane");
    }

    #[test]
    fn drops_empty_attendees() {
        let block = "ATTENDEE:urn:uuid:1234\r\nATTENDEE;CN=Jane Doe;:\r\n";
        let attendees = decode_attendees(block);
        assert_eq!(attendees.len(), 1);
        assert_eq!(attendees[0].name, "Jane Doe");
    }
}
