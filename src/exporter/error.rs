// ==========================================
// SGG Digital - Erreurs du module d'export
// ==========================================
// Macro dérivée thiserror
// ==========================================

use thiserror::Error;

/// Erreurs de la couche export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("écriture du classeur impossible: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("écriture CSV impossible: {0}")]
    Csv(#[from] csv::Error),

    #[error("écriture du fichier impossible: {0}")]
    Io(#[from] std::io::Error),

    #[error("tampon de sortie invalide: {0}")]
    Buffer(String),
}

/// Alias de résultat du module d'export.
pub type ExportResult<T> = Result<T, ExportError>;
