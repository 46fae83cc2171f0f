// ==========================================
// SGG Digital - Rapports d'import
// ==========================================
// Diagnostics de validation et artefact terminal
// d'un passage d'import. Tout résultat est une
// donnée : rien ne traverse la frontière publique
// sous forme d'exception.
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::value::Record;

// ==========================================
// Severity - gravité d'un diagnostic
// ==========================================

/// Gravité d'un diagnostic de cellule.
///
/// Un diagnostic `Error` sur une cellule exclut toute la ligne des
/// enregistrements acceptés ; un `Warning` ne l'exclut pas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

// ==========================================
// ValidationError - diagnostic de cellule
// ==========================================

/// Diagnostic rattaché à une cellule précise du fichier source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Ligne 1-based dans le fichier d'origine (décalage d'en-tête
    /// inclus) ; 0 marque un problème structurel sans cellule.
    pub row: usize,
    /// Libellé de la colonne du schéma ("-" pour un problème structurel).
    pub column: String,
    /// Valeur brute, non coercée.
    pub value: String,
    /// Message lisible, localisé.
    pub message: String,
    /// Gravité du diagnostic.
    pub severity: Severity,
}

// ==========================================
// ImportReport - artefact terminal d'un import
// ==========================================

/// Résultat complet d'un passage d'import.
///
/// Construit une fois par appel, immuable ensuite.
/// Invariants : `valid_rows + skipped_rows == total_rows` ;
/// `success` ⇔ aucun diagnostic de gravité `Error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    /// Vrai ssi aucun diagnostic de gravité `Error` n'existe.
    pub success: bool,
    /// Enregistrements acceptés et coercés, dans l'ordre du fichier.
    pub data: Vec<Record>,
    /// Tous les diagnostics (deux gravités), ordre ligne puis colonne.
    pub errors: Vec<ValidationError>,
    /// Messages structurels non rattachés à une cellule.
    pub warnings: Vec<String>,
    /// Comptage des lignes de données.
    pub total_rows: usize,
    pub valid_rows: usize,
    pub skipped_rows: usize,
}

impl ImportReport {
    /// Rapport d'un fichier sans données exploitables (vide ou sans lignes).
    pub fn empty(warning: String) -> Self {
        Self {
            success: false,
            data: Vec::new(),
            errors: Vec::new(),
            warnings: vec![warning],
            total_rows: 0,
            valid_rows: 0,
            skipped_rows: 0,
        }
    }

    /// Rapport d'un fichier impossible à traiter : une seule erreur
    /// structurelle en ligne 0, aucune ligne analysée.
    pub fn structural_failure(message: String) -> Self {
        Self {
            success: false,
            data: Vec::new(),
            errors: vec![ValidationError {
                row: 0,
                column: "-".to_string(),
                value: "-".to_string(),
                message,
                severity: Severity::Error,
            }],
            warnings: Vec::new(),
            total_rows: 0,
            valid_rows: 0,
            skipped_rows: 0,
        }
    }

    /// Nombre de diagnostics de gravité `Error`.
    pub fn error_count(&self) -> usize {
        self.errors
            .iter()
            .filter(|e| e.severity == Severity::Error)
            .count()
    }

    /// Nombre de diagnostics de gravité `Warning`.
    pub fn warning_count(&self) -> usize {
        self.errors
            .iter()
            .filter(|e| e.severity == Severity::Warning)
            .count()
    }
}
