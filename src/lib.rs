// ==========================================
// SGG Digital - Moteur d'échange de données
// ==========================================
// Import/export de fichiers CSV & Excel piloté
// par des schémas de colonnes déclaratifs.
// Échec partiel ligne par ligne, coercition de
// types déterministe, aller-retour sans perte.
// ==========================================

// Initialisation du système i18n
rust_i18n::i18n!("locales", fallback = "fr");

// ==========================================
// Déclaration des modules
// ==========================================

// Couche domaine - schémas, valeurs typées, rapports
pub mod domain;

// Registre des schémas intégrés
pub mod registry;

// Couche import - analyse de fichiers, validation, orchestration
pub mod importer;

// Couche export - classeurs Excel et texte délimité
pub mod exporter;

// Configuration du moteur
pub mod config;

// Journalisation
pub mod logging;

// Internationalisation
pub mod i18n;

// ==========================================
// Réexports des types principaux
// ==========================================

// Domaine
pub use domain::report::{ImportReport, Severity, ValidationError};
pub use domain::schema::{ColumnSchema, ColumnType};
pub use domain::value::{CellValue, Record};

// Import
pub use importer::orchestrator::{import_bytes, import_path, import_sheet, FileImporterImpl};
pub use importer::{CsvParser, ExcelParser, FileImporter, FileParser, UniversalFileParser};

// Export
pub use exporter::options::{ExportArtifact, ExportOptions};
pub use exporter::{export_to_csv, export_to_workbook};

// Configuration
pub use config::ExchangeConfig;

// ==========================================
// Constantes
// ==========================================

// Version du moteur
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Nom de l'application
pub const APP_NAME: &str = "SGG Digital - Échange de données";
