//! Document type, sex, height and profession.

use super::patterns::{HEIGHT, PROFESSION_LABEL, SEX};
use super::text::{remove_punctuation, title_case};
use super::CardLine;

/// Whether the line is the card header ("CARTE NATIONALE D'IDENTITE ...").
pub fn is_document_type(line: &CardLine<'_>) -> bool {
    let header = remove_punctuation(line.raw).to_uppercase();
    header.contains("CARTE") && (header.contains("IDENTITE") || header.contains("IDENTITÉ"))
}

/// Extract `M` or `F` following the `SEXE` label.
pub fn sex(line: &CardLine<'_>) -> Option<String> {
    if !line.upper.contains("SEXE") {
        return None;
    }
    SEX.captures(&line.upper).map(|caps| caps[1].to_string())
}

/// Extract the height in centimetres, normalized to `<digits>cm`.
pub fn height(line: &CardLine<'_>) -> Option<String> {
    if !line.upper.contains("TAILLE") {
        return None;
    }
    HEIGHT
        .captures(&line.upper)
        .map(|caps| format!("{}cm", &caps[1]))
}

/// Extract the profession: the text after the last colon, or after the
/// `PROFESSION` label when the line has no colon.
pub fn profession(line: &CardLine<'_>) -> Option<String> {
    if !line.upper.contains("PROFESSION") {
        return None;
    }

    let value = match line.raw.rsplit_once(':') {
        Some((_, after)) => after.to_string(),
        None => PROFESSION_LABEL.replace(line.raw, "").into_owned(),
    };

    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Some(title_case(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn line(text: &str) -> CardLine<'_> {
        CardLine::new(0, text)
    }

    #[test]
    fn test_document_type() {
        assert!(is_document_type(&line("CARTE NATIONALE D'IDENTITE")));
        assert!(is_document_type(&line("Carte Nationale d'Identité Burkinabè")));
        assert!(is_document_type(&line("CARTE NATIONALE D'IDEN.TITE")));
        assert!(!is_document_type(&line("BURKINA FASO")));
        assert!(!is_document_type(&line("CARTE D'ELECTEUR")));
    }

    #[test]
    fn test_sex() {
        assert_eq!(sex(&line("SEXE: F")), Some("F".to_string()));
        assert_eq!(sex(&line("Sexe M Taille 175 cm")), Some("M".to_string()));
        assert_eq!(sex(&line("SEXE: X")), None);
        assert_eq!(sex(&line("F")), None);
    }

    #[test]
    fn test_height() {
        assert_eq!(height(&line("TAILLE: 175 cm")), Some("175cm".to_string()));
        assert_eq!(height(&line("Sexe: M  Taille:180CM")), Some("180cm".to_string()));
        assert_eq!(height(&line("TAILLE: inconnue")), None);
        assert_eq!(height(&line("175 cm")), None);
    }

    #[test]
    fn test_profession() {
        assert_eq!(profession(&line("PROFESSION: ÉLÈVE")), Some("Élève".to_string()));
        assert_eq!(profession(&line("Profession : Agent: commercial")), Some("Commercial".to_string()));
        assert_eq!(profession(&line("PROFESSION MÉCANICIEN")), Some("Mécanicien".to_string()));
        assert_eq!(
            profession(&line("PROFESSION: AGENT/COMPTABLE (BTP).")),
            Some("Agent/Comptable (Btp).".to_string())
        );
        assert_eq!(profession(&line("PROFESSION:")), None);
    }
}
