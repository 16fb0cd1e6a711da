//! Property-based tests for field extraction.
//!
//! - Extraction never panics, whatever the line content
//! - Extraction is deterministic
//! - Extracted maps survive a JSON round trip

use cnib_core::{extract, Field, FieldMap};
use proptest::prelude::*;

fn card_like_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\PC{0,80}",
        ".{0,3}",
        "(NOM|PRENOMS|SEXE|TAILLE|PROFESSION|NE LE|EXPIRE LE|DELIVREE LE)[ :]{0,2}[A-Za-z0-9/ ]{0,30}",
        "[0-9 /-]{0,40}",
        "[A-Z][0-9]{8}",
    ]
}

proptest! {
    #[test]
    fn proptest_extract_never_panics(lines in prop::collection::vec("\\PC*", 0..20)) {
        let _ = extract(&lines);
    }

    #[test]
    fn proptest_extract_is_deterministic(lines in prop::collection::vec(card_like_line(), 0..15)) {
        prop_assert_eq!(extract(&lines), extract(&lines));
    }

    #[test]
    fn proptest_json_round_trip(lines in prop::collection::vec(card_like_line(), 0..15)) {
        let fields = extract(&lines);
        let json = serde_json::to_string(&fields).unwrap();
        let back: FieldMap = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, fields);
    }

    #[test]
    fn proptest_values_never_empty(lines in prop::collection::vec(card_like_line(), 0..15)) {
        let fields = extract(&lines);
        for (_, value) in fields.iter() {
            prop_assert!(!value.is_empty());
        }
    }

    #[test]
    fn proptest_nip_is_seventeen_digits(lines in prop::collection::vec(card_like_line(), 0..15)) {
        if let Some(nip) = extract(&lines).get(Field::Nip) {
            prop_assert_eq!(nip.len(), 17);
            prop_assert!(nip.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
