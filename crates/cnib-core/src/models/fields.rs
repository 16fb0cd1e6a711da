//! Extracted card fields and the ordered map that holds them.

use std::fmt;

use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Date layout printed on the card.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// A field that can be read from a national ID card.
///
/// The serialized names are the keys of the exported JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    /// Document type label.
    #[serde(rename = "Type Document")]
    DocumentType,
    /// 17-digit personal identification number (NIP).
    #[serde(rename = "Numero_NIP")]
    Nip,
    /// Surname.
    #[serde(rename = "Nom")]
    Surname,
    /// Given names.
    #[serde(rename = "Prenom")]
    GivenNames,
    /// Date of birth (DD/MM/YYYY).
    #[serde(rename = "Date_naissance")]
    BirthDate,
    /// Place of birth.
    #[serde(rename = "Lieu_naissance")]
    BirthPlace,
    /// Sex, `M` or `F`.
    #[serde(rename = "Sexe")]
    Sex,
    /// Height, e.g. `175cm`.
    #[serde(rename = "Taille")]
    Height,
    /// Profession.
    #[serde(rename = "Profession")]
    Profession,
    /// Date of issue (DD/MM/YYYY).
    #[serde(rename = "Date_delivrance")]
    IssueDate,
    /// Date of expiry (DD/MM/YYYY).
    #[serde(rename = "Date_expiration")]
    ExpiryDate,
    /// Card number.
    #[serde(rename = "Numero_document")]
    DocumentNumber,
}

impl Field {
    /// All fields in card reading order.
    pub const ALL: [Field; 12] = [
        Field::DocumentType,
        Field::Nip,
        Field::Surname,
        Field::GivenNames,
        Field::BirthDate,
        Field::BirthPlace,
        Field::Sex,
        Field::Height,
        Field::Profession,
        Field::IssueDate,
        Field::ExpiryDate,
        Field::DocumentNumber,
    ];

    /// Key used in exported documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::DocumentType => "Type Document",
            Field::Nip => "Numero_NIP",
            Field::Surname => "Nom",
            Field::GivenNames => "Prenom",
            Field::BirthDate => "Date_naissance",
            Field::BirthPlace => "Lieu_naissance",
            Field::Sex => "Sexe",
            Field::Height => "Taille",
            Field::Profession => "Profession",
            Field::IssueDate => "Date_delivrance",
            Field::ExpiryDate => "Date_expiration",
            Field::DocumentNumber => "Numero_document",
        }
    }

    /// Whether the field holds a `DD/MM/YYYY` date.
    pub fn is_date(&self) -> bool {
        matches!(self, Field::BirthDate | Field::IssueDate | Field::ExpiryDate)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Insertion-ordered mapping of detected fields to their values.
///
/// A field is present only if it was detected. Writing a field that is
/// already present replaces its value but keeps its original position, so
/// iteration (and JSON output) follows first-detection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(Field, String)>,
}

impl FieldMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value.
    ///
    /// Empty values are ignored and `false` is returned.
    pub fn insert(&mut self, field: Field, value: impl Into<String>) -> bool {
        let value = value.into();
        if value.is_empty() {
            return false;
        }

        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field, value)),
        }
        true
    }

    /// Get the value of a field.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over fields in first-detection order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// Fields that were not detected, in card reading order.
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| !self.contains(*f))
            .collect()
    }

    /// Parse a date field into a calendar date.
    ///
    /// Returns `None` when the field is absent or is not a real date
    /// (e.g. `31/02/2020`).
    pub fn date(&self, field: Field) -> Option<NaiveDate> {
        self.get(field)
            .and_then(|v| NaiveDate::parse_from_str(v, DATE_FORMAT).ok())
    }

    /// Report plausibility issues relative to today's date.
    ///
    /// This is a report for callers that want one; extraction never calls it.
    pub fn validate(&self) -> Vec<String> {
        self.validate_at(chrono::Local::now().date_naive())
    }

    /// Report plausibility issues relative to `today`.
    pub fn validate_at(&self, today: NaiveDate) -> Vec<String> {
        let mut issues = Vec::new();

        for (field, value) in self.iter().filter(|(f, _)| f.is_date()) {
            if self.date(field).is_none() {
                issues.push(format!("{} is not a valid date: {}", field, value));
            }
        }

        if let Some(birth) = self.date(Field::BirthDate) {
            if birth > today {
                issues.push(format!("birth date {} is in the future", birth.format(DATE_FORMAT)));
            }
        }

        let issue = self.date(Field::IssueDate);
        let expiry = self.date(Field::ExpiryDate);

        if let (Some(issue), Some(expiry)) = (issue, expiry) {
            if expiry < issue {
                issues.push(format!(
                    "expiry date {} precedes issue date {}",
                    expiry.format(DATE_FORMAT),
                    issue.format(DATE_FORMAT)
                ));
            }
        }

        if let Some(expiry) = expiry {
            if expiry < today {
                issues.push(format!("document expired on {}", expiry.format(DATE_FORMAT)));
            }
        }

        issues
    }

    /// Serialize to pretty JSON with the given indent width.
    ///
    /// Non-ASCII characters are written verbatim.
    pub fn to_json(&self, indent: usize) -> serde_json::Result<String> {
        let indent = " ".repeat(indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only ever writes valid UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, value) in &self.entries {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldMapVisitor;

        impl<'de> Visitor<'de> for FieldMapVisitor {
            type Value = FieldMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of card fields to strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut fields = FieldMap::new();
                while let Some((field, value)) = access.next_entry::<Field, String>()? {
                    fields.insert(field, value);
                }
                Ok(fields)
            }
        }

        deserializer.deserialize_map(FieldMapVisitor)
    }
}

impl FromIterator<(Field, String)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        let mut fields = FieldMap::new();
        for (field, value) in iter {
            fields.insert(field, value);
        }
        fields
    }
}
