// ==========================================
// SGG Digital - Cellules typées
// ==========================================
// Valeur d'une cellule après coercition d'import,
// et coercition inverse (affichage) pour l'export.
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::i18n;

/// Valeur typée d'une cellule après coercition.
///
/// La représentation canonique d'une date est un instant UTC
/// (sérialisé en ISO-8601), quel que soit l'encodage source
/// (chaîne ISO ou numéro de série tableur).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Bool(bool),
    Number(f64),
    Date(DateTime<Utc>),
    Text(String),
}

/// Enregistrement accepté : une ligne coercée, indexée par les `key` du schéma.
///
/// BTreeMap pour un ordre d'itération déterministe (l'inférence d'en-têtes
/// à l'export sans colonnes explicites en dépend).
pub type Record = BTreeMap<String, CellValue>;

impl CellValue {
    /// Coercition d'affichage (sens export).
    ///
    /// Les booléens reprennent la paire de jetons localisée (Oui/Non),
    /// cohérente avec les jetons acceptés à l'import ; les dates sont
    /// rendues en date calendaire JJ/MM/AAAA.
    pub fn display(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Bool(true) => i18n::t("export.bool_true"),
            CellValue::Bool(false) => i18n::t("export.bool_false"),
            CellValue::Number(n) => n.to_string(),
            CellValue::Date(d) => d.format("%d/%m/%Y").to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }

    /// Vrai si la cellule est vide.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}
