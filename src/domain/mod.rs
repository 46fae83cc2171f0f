// ==========================================
// SGG Digital - Couche domaine
// ==========================================
// Objets valeur de l'échange tabulaire :
// schémas de colonnes, cellules typées, rapports.
// Aucun état partagé, aucune persistance.
// ==========================================

// Déclaration des modules
pub mod report;
pub mod schema;
pub mod value;

// Réexport des types principaux
pub use report::{ImportReport, Severity, ValidationError};
pub use schema::{ColumnSchema, ColumnType, TransformFn, ValidateFn};
pub use value::{CellValue, Record};
