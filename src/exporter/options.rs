// ==========================================
// SGG Digital - Options et artefact d'export
// ==========================================
// Configuration transiente d'un appel d'export,
// et artefact produit (octets + nom suggéré).
// Le déclenchement du téléchargement appartient
// à l'application appelante.
// ==========================================

use chrono::Local;
use std::path::{Path, PathBuf};

use crate::domain::schema::ColumnSchema;

// ==========================================
// ExportOptions
// ==========================================

/// Configuration d'un appel d'export, construite par l'appelant,
/// jamais persistée.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Radical du nom de fichier (sans extension).
    pub filename: String,
    /// Nom de feuille du classeur (défaut : configuration du moteur).
    pub sheet_name: Option<String>,
    /// Colonnes explicites (ordre + libellés) ; à défaut, inférées des
    /// clés du premier enregistrement.
    pub columns: Option<Vec<ColumnSchema>>,
    /// Ligne de titre optionnelle en bandeau.
    pub title: Option<String>,
    /// Ligne d'horodatage en bandeau.
    pub include_timestamp: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            filename: "export".to_string(),
            sheet_name: None,
            columns: None,
            title: None,
            include_timestamp: true,
        }
    }
}

impl ExportOptions {
    pub fn new(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            ..Self::default()
        }
    }

    pub fn sheet_name(mut self, sheet_name: &str) -> Self {
        self.sheet_name = Some(sheet_name.to_string());
        self
    }

    pub fn columns(mut self, columns: Vec<ColumnSchema>) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Sans ligne d'horodatage : indispensable pour un aller-retour
    /// sans perte (le bandeau deviendrait l'en-tête au ré-import).
    pub fn without_timestamp(mut self) -> Self {
        self.include_timestamp = false;
        self
    }
}

// ==========================================
// ExportArtifact
// ==========================================

/// Artefact produit par un export : les octets sérialisés et le nom
/// de fichier suggéré, daté du jour (`<radical>-<AAAA-MM-JJ>.<ext>`).
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Écrit l'artefact dans un répertoire et retourne son chemin.
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> std::io::Result<PathBuf> {
        let path = dir.as_ref().join(&self.filename);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// Nom de fichier daté : `<radical>-<AAAA-MM-JJ>.<ext>`.
pub(crate) fn stamped_filename(stem: &str, extension: &str) -> String {
    format!(
        "{}-{}.{}",
        stem,
        Local::now().format("%Y-%m-%d"),
        extension
    )
}
