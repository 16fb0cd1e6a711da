//! Common regex patterns for CNIB line extraction.
//!
//! Patterns named `*_LABEL` run case-insensitively on punctuation-stripped
//! text. All others expect the uppercased line.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Dates are always printed DD/MM/YYYY on the card
    pub static ref DATE: Regex = Regex::new(
        r"([0-9]{2}/[0-9]{2}/[0-9]{4})"
    ).unwrap();

    // First run of capitals after the birth date, e.g. "01/02/1990 A OUAGADOUGOU"
    pub static ref BIRTH_PLACE: Regex = Regex::new(
        r"[0-9]{2}/[0-9]{2}/[0-9]{4}.*?(\p{Lu}[\p{Lu}' -]*)"
    ).unwrap();

    // "à Ouagadougou" / "a Ouagadougou"
    pub static ref PLACE_PREPOSITION: Regex = Regex::new(
        r"^[AÀ](?:\s+|$)"
    ).unwrap();

    pub static ref SURNAME_LABEL: Regex = Regex::new(
        r"(?i)^\s*NOMS?\s*"
    ).unwrap();

    pub static ref GIVEN_NAMES_LABEL: Regex = Regex::new(
        r"(?i)^\s*PR[ÉE]NOMS?\s*"
    ).unwrap();

    pub static ref PROFESSION_LABEL: Regex = Regex::new(
        r"(?i)^.*?PROFESSION\s*"
    ).unwrap();

    pub static ref SEX: Regex = Regex::new(
        r"SEXE\s*:?\s*([MF])"
    ).unwrap();

    // "TAILLE: 175 cm" / "TAILLE 175CM"
    pub static ref HEIGHT: Regex = Regex::new(
        r"TAILLE\s*:?\s*([0-9]+) ?CM"
    ).unwrap();

    // Card number printed after the expiry date on the same line
    pub static ref EXPIRY_DOCUMENT_NUMBER: Regex = Regex::new(
        r"[0-9]{2}/[0-9]{2}/[0-9]{4}.*?([A-Z0-9]{5,})"
    ).unwrap();

    // Card number alone on its line, e.g. "B12345678"
    pub static ref ISOLATED_DOCUMENT_NUMBER: Regex = Regex::new(
        r"^[A-Z][0-9]{8}$"
    ).unwrap();
}
