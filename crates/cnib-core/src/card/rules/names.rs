//! Surname and given names.

use regex::Regex;

use super::patterns::{GIVEN_NAMES_LABEL, SURNAME_LABEL};
use super::text::title_case;
use super::CardLine;

/// Whether the line starts with the `NOM`/`NOMS` label.
pub fn has_surname_label(line: &CardLine<'_>) -> bool {
    SURNAME_LABEL.is_match(&line.clean)
}

/// Whether the line starts with the `PRENOM(S)`/`PRÉNOM(S)` label.
pub fn has_given_names_label(line: &CardLine<'_>) -> bool {
    GIVEN_NAMES_LABEL.is_match(&line.clean)
}

/// Surname with any leading `NOM`/`NOMS` label removed, title-cased.
///
/// Values without a single letter are rejected.
pub fn surname(line: &CardLine<'_>) -> Option<String> {
    name_value(&line.clean, &SURNAME_LABEL)
}

/// Given names with any leading `PRENOM(S)` label removed, title-cased.
pub fn given_names(line: &CardLine<'_>) -> Option<String> {
    name_value(&line.clean, &GIVEN_NAMES_LABEL)
}

fn name_value(clean: &str, label: &Regex) -> Option<String> {
    let value = label.replace(clean, "");
    let value = value.trim_matches(|c: char| c == '-' || c.is_whitespace());
    if !value.chars().any(char::is_alphabetic) {
        return None;
    }
    Some(title_case(value))
}
