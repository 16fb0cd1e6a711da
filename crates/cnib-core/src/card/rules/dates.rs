//! Birth, issue and expiry dates, and the place of birth.

use super::patterns::{BIRTH_PLACE, DATE, PLACE_PREPOSITION};
use super::text::title_case;
use super::CardLine;

/// First `DD/MM/YYYY` date in the text.
pub fn first_date(text: &str) -> Option<String> {
    DATE.captures(text).map(|caps| caps[1].to_string())
}

fn is_birth_line(line: &CardLine<'_>) -> bool {
    line.upper.contains("NÉ") || line.upper.contains("NE(E)") || line.upper.contains("NE LE")
}

/// Date of birth from a `NÉ(E) LE` line.
pub fn birth_date(line: &CardLine<'_>) -> Option<String> {
    if !is_birth_line(line) {
        return None;
    }
    first_date(&line.upper)
}

/// Place of birth from a `NÉ(E) LE` line.
///
/// Only the same line is considered: the place is the first run of capitals
/// after the birth date, without a leading `A`/`À`.
pub fn birth_place(line: &CardLine<'_>) -> Option<String> {
    if !is_birth_line(line) {
        return None;
    }

    let caps = BIRTH_PLACE.captures(&line.upper)?;
    let place = PLACE_PREPOSITION.replace(caps[1].trim(), "");
    let place = place.trim_matches(|c: char| c == '-' || c == '\'' || c.is_whitespace());
    if place.is_empty() {
        return None;
    }
    Some(title_case(place))
}

/// Date of issue from a `DÉLIVRÉE LE` line.
pub fn issue_date(line: &CardLine<'_>) -> Option<String> {
    if !(line.upper.contains("DÉLIVRÉE LE") || line.upper.contains("DELIVREE LE")) {
        return None;
    }
    first_date(&line.upper)
}

/// Date of expiry from an `EXPIRE LE` line.
pub fn expiry_date(line: &CardLine<'_>) -> Option<String> {
    if !line.upper.contains("EXPIRE LE") {
        return None;
    }
    first_date(&line.upper)
}
