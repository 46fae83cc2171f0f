// ==========================================
// SGG Digital - Validation de cellule
// ==========================================
// Une cellule brute contre une colonne du schéma :
// zéro ou un diagnostic, premier contrôle fautif
// gagnant (court-circuit).
// ==========================================

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::report::{Severity, ValidationError};
use crate::domain::schema::{ColumnSchema, ColumnType, BOOLEAN_TOKENS};
use crate::i18n;

// Motif volontairement conservateur : local@domaine-avec-point,
// pas le RFC 5322 complet
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Valide une cellule brute contre sa colonne.
///
/// Ordre des contrôles, premier fautif gagnant :
/// requis+vide, vide (aucun diagnostic), contrôle du type,
/// longueur maximale (texte), valeurs admises, prédicat personnalisé.
///
/// # Paramètres
/// - raw : valeur brute de la cellule
/// - col : colonne du schéma appariée
/// - row : numéro de ligne rapporté (1-based, en-tête inclus)
pub fn validate_cell(raw: &str, col: &ColumnSchema, row: usize) -> Option<ValidationError> {
    let value = raw.trim();

    // Contrôle requis / vide
    if value.is_empty() {
        if col.required {
            return Some(diagnostic(
                row,
                col,
                value,
                i18n::t_with_args("import.required", &[("label", &col.label)]),
                Severity::Error,
            ));
        }
        return None;
    }

    // Contrôle propre au type
    if let Some(error) = check_type(value, col, row) {
        return Some(error);
    }

    // Longueur maximale (texte uniquement) : avertissement, sans troncature
    if col.ty == ColumnType::Text {
        if let Some(max_length) = col.max_length {
            let len = value.chars().count();
            if len > max_length {
                return Some(diagnostic(
                    row,
                    col,
                    value,
                    i18n::t_with_args(
                        "import.max_length",
                        &[("max", &max_length.to_string()), ("len", &len.to_string())],
                    ),
                    Severity::Warning,
                ));
            }
        }
    }

    // Appartenance à l'énumération (insensible à la casse)
    if let Some(allowed) = &col.allowed_values {
        let needle = value.to_lowercase();
        if !allowed.iter().any(|a| a.to_lowercase() == needle) {
            return Some(diagnostic(
                row,
                col,
                value,
                i18n::t_with_args(
                    "import.not_allowed",
                    &[("value", value), ("allowed", &allowed.join(", "))],
                ),
                Severity::Error,
            ));
        }
    }

    // Prédicat personnalisé
    if let Some(validate) = &col.validate {
        if let Err(message) = validate(value) {
            return Some(diagnostic(row, col, value, message, Severity::Error));
        }
    }

    None
}

/// Contrôle propre au type de la colonne.
fn check_type(value: &str, col: &ColumnSchema, row: usize) -> Option<ValidationError> {
    match col.ty {
        ColumnType::Text => None,

        ColumnType::Email => {
            if !EMAIL_REGEX.is_match(value) {
                return Some(diagnostic(
                    row,
                    col,
                    value,
                    i18n::t_with_args("import.invalid_email", &[("value", value)]),
                    Severity::Error,
                ));
            }
            None
        }

        ColumnType::Number => {
            let Ok(num) = value.parse::<f64>() else {
                return Some(diagnostic(
                    row,
                    col,
                    value,
                    i18n::t_with_args("import.expected_number", &[("value", value)]),
                    Severity::Error,
                ));
            };
            if let Some(min) = col.min {
                if num < min {
                    return Some(diagnostic(
                        row,
                        col,
                        value,
                        i18n::t_with_args(
                            "import.min",
                            &[("min", &min.to_string()), ("value", &num.to_string())],
                        ),
                        Severity::Error,
                    ));
                }
            }
            if let Some(max) = col.max {
                if num > max {
                    return Some(diagnostic(
                        row,
                        col,
                        value,
                        i18n::t_with_args(
                            "import.max",
                            &[("max", &max.to_string()), ("value", &num.to_string())],
                        ),
                        Severity::Error,
                    ));
                }
            }
            None
        }

        // Jeton inconnu : avertissement seulement, la coercition de repli
        // conserve la ligne
        ColumnType::Boolean => {
            if !BOOLEAN_TOKENS.contains(&value.to_lowercase().as_str()) {
                return Some(diagnostic(
                    row,
                    col,
                    value,
                    i18n::t_with_args("import.expected_boolean", &[("value", value)]),
                    Severity::Warning,
                ));
            }
            None
        }

        ColumnType::Date => {
            if crate::domain::schema::parse_date(value).is_none() {
                return Some(diagnostic(
                    row,
                    col,
                    value,
                    i18n::t_with_args("import.invalid_date", &[("value", value)]),
                    Severity::Error,
                ));
            }
            None
        }
    }
}

fn diagnostic(
    row: usize,
    col: &ColumnSchema,
    value: &str,
    message: String,
    severity: Severity,
) -> ValidationError {
    ValidationError {
        row,
        column: col.label.clone(),
        value: value.to_string(),
        message,
        severity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_col() -> ColumnSchema {
        ColumnSchema::new("nom", "Nom", ColumnType::Text).required()
    }

    #[test]
    fn test_required_empty_is_error() {
        let error = validate_cell("", &text_col(), 3).unwrap();
        assert_eq!(error.severity, Severity::Error);
        assert_eq!(error.row, 3);
        assert_eq!(error.column, "Nom");
        assert_eq!(error.message, "\"Nom\" est obligatoire");
    }

    #[test]
    fn test_optional_empty_skips_remaining_checks() {
        let col = ColumnSchema::new("email", "Email", ColumnType::Email);
        assert!(validate_cell("", &col, 2).is_none());
    }

    #[test]
    fn test_email_pattern() {
        let col = ColumnSchema::new("email", "Email", ColumnType::Email);
        assert!(validate_cell("jean.mba@sgg.ga", &col, 2).is_none());

        let error = validate_cell("pas-un-email", &col, 2).unwrap();
        assert_eq!(error.severity, Severity::Error);
        assert!(error.message.contains("pas-un-email"));

        // Domaine sans point : rejeté par le motif conservateur
        assert!(validate_cell("a@b", &col, 2).is_some());
    }

    #[test]
    fn test_number_bounds_inclusive() {
        let col = ColumnSchema::new("score", "Score", ColumnType::Number)
            .min(0.0)
            .max(100.0);

        assert!(validate_cell("0", &col, 2).is_none());
        assert!(validate_cell("100", &col, 2).is_none());

        let low = validate_cell("-1", &col, 2).unwrap();
        assert_eq!(low.severity, Severity::Error);
        assert_eq!(low.message, "Min 0, reçu: -1");

        let high = validate_cell("101", &col, 2).unwrap();
        assert_eq!(high.severity, Severity::Error);
        assert_eq!(high.message, "Max 100, reçu: 101");
    }

    #[test]
    fn test_number_garbage_is_error() {
        let col = ColumnSchema::new("score", "Score", ColumnType::Number);
        let error = validate_cell("abc", &col, 2).unwrap();
        assert_eq!(error.severity, Severity::Error);
        assert!(error.message.contains("abc"));
    }

    #[test]
    fn test_boolean_unknown_token_is_warning() {
        let col = ColumnSchema::new("actif", "Actif", ColumnType::Boolean);

        for token in BOOLEAN_TOKENS {
            assert!(validate_cell(token, &col, 2).is_none());
        }

        let warning = validate_cell("maybe", &col, 2).unwrap();
        assert_eq!(warning.severity, Severity::Warning);
    }

    #[test]
    fn test_date_serial_and_iso_accepted() {
        let col = ColumnSchema::new("date", "Date", ColumnType::Date);
        assert!(validate_cell("44562", &col, 2).is_none());
        assert!(validate_cell("2022-01-01", &col, 2).is_none());

        let error = validate_cell("pas une date", &col, 2).unwrap();
        assert_eq!(error.severity, Severity::Error);
    }

    #[test]
    fn test_max_length_is_warning_without_truncation() {
        let col = ColumnSchema::new("sigle", "Sigle", ColumnType::Text).max_length(3);
        let warning = validate_cell("ABCDE", &col, 2).unwrap();

        assert_eq!(warning.severity, Severity::Warning);
        assert_eq!(warning.message, "Max 3 caractères (5 reçus)");
        // La valeur brute est conservée telle quelle
        assert_eq!(warning.value, "ABCDE");
    }

    #[test]
    fn test_allowed_values_error_names_value_and_set() {
        let col =
            ColumnSchema::new("type", "Type", ColumnType::Text).allowed_values(&["a", "b"]);

        assert!(validate_cell("A", &col, 2).is_none()); // insensible à la casse

        let error = validate_cell("c", &col, 2).unwrap();
        assert_eq!(error.severity, Severity::Error);
        assert!(error.message.contains("\"c\""));
        assert!(error.message.contains("a, b"));
    }

    #[test]
    fn test_custom_validate_message_is_kept() {
        let col = ColumnSchema::new("code", "Code", ColumnType::Text)
            .validate_with(|v| {
                if v.starts_with("SGG-") {
                    Ok(())
                } else {
                    Err(format!("Code invalide: {v}"))
                }
            });

        assert!(validate_cell("SGG-042", &col, 2).is_none());

        let error = validate_cell("042", &col, 2).unwrap();
        assert_eq!(error.severity, Severity::Error);
        assert_eq!(error.message, "Code invalide: 042");
    }

    #[test]
    fn test_type_check_short_circuits_enum() {
        // Le contrôle de type passe avant l'énumération
        let col = ColumnSchema::new("niveau", "Niveau", ColumnType::Number)
            .allowed_values(&["1", "2"]);
        let error = validate_cell("abc", &col, 2).unwrap();
        assert!(error.message.starts_with("Nombre attendu"));
    }
}
