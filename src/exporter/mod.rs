// ==========================================
// SGG Digital - Couche export
// ==========================================
// Enregistrements typés → classeur Excel ou
// texte délimité, mise en page partagée.
// ==========================================

// Déclaration des modules
pub mod delimited;
pub mod error;
pub(crate) mod layout;
pub mod options;
pub mod workbook;

// Réexport des types principaux
pub use delimited::export_to_csv;
pub use error::{ExportError, ExportResult};
pub use options::{ExportArtifact, ExportOptions};
pub use workbook::export_to_workbook;

use crate::config::ExchangeConfig;
use crate::domain::value::Record;

/// Export classeur en tâche de fond (même discipline que l'import
/// pour les très gros volumes).
pub async fn export_to_workbook_async(
    records: Vec<Record>,
    options: ExportOptions,
    config: ExchangeConfig,
) -> ExportResult<ExportArtifact> {
    match tokio::task::spawn_blocking(move || export_to_workbook(&records, &options, &config))
        .await
    {
        Ok(result) => result,
        Err(e) => Err(ExportError::Buffer(e.to_string())),
    }
}

/// Export texte délimité en tâche de fond.
pub async fn export_to_csv_async(
    records: Vec<Record>,
    options: ExportOptions,
    config: ExchangeConfig,
) -> ExportResult<ExportArtifact> {
    match tokio::task::spawn_blocking(move || export_to_csv(&records, &options, &config)).await {
        Ok(result) => result,
        Err(e) => Err(ExportError::Buffer(e.to_string())),
    }
}
