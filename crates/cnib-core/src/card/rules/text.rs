//! Text normalization helpers shared by the rules.

/// Replace punctuation with spaces and collapse whitespace.
///
/// Letters, digits and characters in `keep` survive. Replacing rather than
/// deleting keeps `NOM:Dupont` splittable into label and value.
pub fn strip_punctuation(text: &str, keep: &[char]) -> String {
    let replaced: String = text
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() || keep.contains(&c) {
                c
            } else {
                ' '
            }
        })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Delete punctuation, keeping letters, digits and whitespace.
pub fn remove_punctuation(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Capitalize the first letter of every word and lowercase the rest.
///
/// A word starts at any letter that does not follow another letter, so
/// `BOBO-DIOULASSO` becomes `Bobo-Dioulasso`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}

/// Keep only ASCII digits.
pub fn digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strip_punctuation() {
        assert_eq!(strip_punctuation("NOM:Dupont", &[]), "NOM Dupont");
        assert_eq!(strip_punctuation("CARTE NATIONALE D'IDENTITE", &[]), "CARTE NATIONALE D IDENTITE");
        assert_eq!(strip_punctuation(" Jean-Paul. ", &['-']), "Jean-Paul");
    }

    #[test]
    fn test_remove_punctuation() {
        assert_eq!(remove_punctuation("D'IDEN.TITE"), "DIDENTITE");
        assert_eq!(remove_punctuation("CARTE: N°1"), "CARTE N1");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("OUAGADOUGOU"), "Ouagadougou");
        assert_eq!(title_case("jean paul"), "Jean Paul");
        assert_eq!(title_case("BOBO-DIOULASSO"), "Bobo-Dioulasso");
        assert_eq!(title_case("ÉLÈVE"), "Élève");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_digits() {
        assert_eq!(digits("ID: 1234-56 x7"), "1234567");
        assert_eq!(digits("no digits"), "");
    }
}
