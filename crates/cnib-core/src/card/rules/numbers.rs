//! NIP and card number.

use super::patterns::{EXPIRY_DOCUMENT_NUMBER, ISOLATED_DOCUMENT_NUMBER};
use super::text::digits;
use super::CardLine;

/// Number of digits in a NIP.
pub const NIP_LENGTH: usize = 17;

/// The line's digits when there are exactly [`NIP_LENGTH`] of them.
pub fn nip(line: &CardLine<'_>) -> Option<String> {
    let digits = digits(line.raw);
    (digits.len() == NIP_LENGTH).then_some(digits)
}

/// Card number printed after the expiry date on an `EXPIRE LE` line.
pub fn expiry_document_number(line: &CardLine<'_>) -> Option<String> {
    if !line.upper.contains("EXPIRE LE") {
        return None;
    }
    EXPIRY_DOCUMENT_NUMBER
        .captures(&line.upper)
        .map(|caps| caps[1].to_string())
}

/// A line holding only a card number: one capital letter and eight digits.
pub fn isolated_document_number(line: &CardLine<'_>) -> Option<String> {
    ISOLATED_DOCUMENT_NUMBER
        .is_match(&line.clean)
        .then(|| line.clean.clone())
}
