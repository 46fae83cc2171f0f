// ==========================================
// SGG Digital - Schémas de colonnes
// ==========================================
// Description déclarative d'un champ attendu :
// type fermé (union étiquetée), contraintes,
// coercition d'import par type.
// ==========================================

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::fmt;
use std::sync::Arc;

use crate::domain::value::CellValue;

// ==========================================
// Jetons booléens
// ==========================================

/// Jetons bruts acceptés pour une cellule booléenne (insensible à la casse).
pub const BOOLEAN_TOKENS: [&str; 8] = ["true", "false", "1", "0", "oui", "non", "yes", "no"];

/// Sous-ensemble des jetons coercés vers `true`.
pub const TRUTHY_TOKENS: [&str; 4] = ["true", "1", "oui", "yes"];

// Jours entre le jour 0 des tableurs (1899-12-30, bogue bissextile
// 1900 inclus) et l'époque Unix (1970-01-01).
const SERIAL_UNIX_OFFSET_DAYS: f64 = 25_569.0;

// ==========================================
// Prédicats personnalisés
// ==========================================

/// Validation personnalisée : `Err(message)` devient le diagnostic.
pub type ValidateFn = Arc<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

/// Coercition personnalisée : remplace entièrement la coercition par défaut
/// de la colonne (la validation s'applique toujours à la valeur brute avant).
pub type TransformFn = Arc<dyn Fn(&str) -> CellValue + Send + Sync>;

// ==========================================
// ColumnType - union fermée des types de cellule
// ==========================================

/// Type attendu d'une colonne.
///
/// Union étiquetée fermée : chaque variante porte sa coercition d'import,
/// résolue une fois au chargement du schéma puis appliquée par `match`
/// exhaustif (jamais de répartition sur une chaîne).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Number,
    Boolean,
    Date,
    Email,
}

impl ColumnType {
    /// Coercition d'import par défaut pour ce type.
    ///
    /// Totale : une entrée invalide produit une valeur de repli
    /// (la ligne fautive a déjà été exclue par son diagnostic),
    /// jamais une panique.
    pub fn coerce(&self, raw: &str) -> CellValue {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }
        match self {
            ColumnType::Number => CellValue::Number(trimmed.parse::<f64>().unwrap_or(0.0)),
            ColumnType::Boolean => {
                CellValue::Bool(TRUTHY_TOKENS.contains(&trimmed.to_lowercase().as_str()))
            }
            ColumnType::Date => match parse_date(trimmed) {
                Some(instant) => CellValue::Date(instant),
                None => CellValue::Empty,
            },
            ColumnType::Text | ColumnType::Email => CellValue::Text(trimmed.to_string()),
        }
    }
}

/// Analyse une cellule date brute.
///
/// Deux encodages sources pour un même instant canonique UTC :
/// - numéro de série tableur (jour 0 = 1899-12-30), fractions horaires admises ;
/// - chaîne calendaire : RFC 3339, `AAAA-MM-JJ[ HH:MM:SS]`, ou `JJ/MM/AAAA`
///   (format d'affichage de l'export, requis pour l'aller-retour).
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(serial) = raw.parse::<f64>() {
        let millis = ((serial - SERIAL_UNIX_OFFSET_DAYS) * 86_400_000.0).round() as i64;
        return DateTime::<Utc>::from_timestamp_millis(millis);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    for format in ["%Y-%m-%d", "%d/%m/%Y"] {
        if let Ok(day) = NaiveDate::parse_from_str(raw, format) {
            return day.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
    }
    None
}

// ==========================================
// ColumnSchema - description d'un champ
// ==========================================

/// Description déclarative d'un champ logique d'un type d'enregistrement.
///
/// Invariant (vérifié par le registre à la construction) : `key` et `label`
/// sont uniques au sein d'un schéma ; `label` sert de cible d'appariement
/// des en-têtes de fichier.
#[derive(Clone)]
pub struct ColumnSchema {
    /// Identifiant interne stable (clé des enregistrements produits).
    pub key: String,
    /// Libellé d'en-tête lisible (affichage et appariement).
    pub label: String,
    /// Type de données attendu.
    pub ty: ColumnType,
    /// Une cellule vide est-elle une erreur ?
    pub required: bool,
    /// Longueur maximale (texte uniquement, avertissement sans troncature).
    pub max_length: Option<usize>,
    /// Bornes numériques (inclusives).
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Énumération des valeurs admises (comparaison insensible à la casse).
    pub allowed_values: Option<Vec<String>>,
    /// Prédicat de validation personnalisé.
    pub validate: Option<ValidateFn>,
    /// Coercition personnalisée (remplace la coercition par défaut).
    pub transform: Option<TransformFn>,
}

impl ColumnSchema {
    pub fn new(key: &str, label: &str, ty: ColumnType) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            ty,
            required: false,
            max_length: None,
            min: None,
            max: None,
            allowed_values: None,
            validate: None,
            transform: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn allowed_values(mut self, values: &[&str]) -> Self {
        self.allowed_values = Some(values.iter().map(|v| v.to_string()).collect());
        self
    }

    pub fn validate_with(
        mut self,
        validate: impl Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.validate = Some(Arc::new(validate));
        self
    }

    pub fn transform_with(
        mut self,
        transform: impl Fn(&str) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        self.transform = Some(Arc::new(transform));
        self
    }

    /// Coercition d'import d'une cellule brute pour cette colonne.
    ///
    /// La coercition personnalisée, si présente, remplace entièrement la
    /// coercition par défaut du type ; une cellule vide reste vide.
    pub fn coerce(&self, raw: &str) -> CellValue {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }
        if let Some(transform) = &self.transform {
            return transform(trimmed);
        }
        self.ty.coerce(trimmed)
    }
}

// Les fermetures ne sont pas Debug : implémentation manuelle.
impl fmt::Debug for ColumnSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSchema")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("ty", &self.ty)
            .field("required", &self.required)
            .field("max_length", &self.max_length)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("allowed_values", &self.allowed_values)
            .field("validate", &self.validate.is_some())
            .field("transform", &self.transform.is_some())
            .finish()
    }
}
