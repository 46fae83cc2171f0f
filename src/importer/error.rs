// ==========================================
// SGG Digital - Erreurs du module d'import
// ==========================================
// Macro dérivée thiserror
// ==========================================

use thiserror::Error;

/// Erreurs de la couche import.
///
/// Seules les défaillances d'analyse structurelle circulent sous cette
/// forme, et uniquement entre composants internes : la frontière publique
/// les convertit en diagnostic structurel dans le rapport.
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== Erreurs de fichier =====
    #[error("fichier introuvable: {0}")]
    FileNotFound(String),

    #[error("format de fichier non supporté: {0} (seuls .xlsx/.xls/.csv sont acceptés)")]
    UnsupportedFormat(String),

    #[error("lecture du fichier impossible: {0}")]
    FileRead(String),

    // ===== Erreurs d'analyse =====
    #[error("analyse du classeur impossible: {0}")]
    WorkbookParse(String),

    #[error("analyse CSV impossible: {0}")]
    CsvParse(String),

    // Classeur sans aucune feuille : signalé comme avertissement
    // structurel, pas comme erreur d'analyse
    #[error("classeur sans feuille de calcul")]
    EmptyWorkbook,

    // ===== Erreurs génériques =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileRead(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParse(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::WorkbookParse(err.to_string())
    }
}

/// Alias de résultat du module d'import.
pub type ImportResult<T> = Result<T, ImportError>;
