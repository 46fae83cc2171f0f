// ==========================================
// SGG Digital - Interfaces de la couche import
// ==========================================
// Définition des interfaces (sans implémentation)
// ==========================================

use async_trait::async_trait;
use std::path::Path;

use crate::domain::report::ImportReport;
use crate::domain::schema::ColumnSchema;
use crate::importer::error::ImportResult;
use crate::importer::file_parser::ParsedSheet;

// ==========================================
// FileParser - analyse structurelle
// ==========================================
// Rôle : octets bruts → grille générique de cellules
// Implémenté par : CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// Analyse des octets de fichier en une feuille générique.
    ///
    /// # Retour
    /// - Ok(ParsedSheet) : en-têtes ordonnés + lignes associatives
    /// - Err : octets illisibles ou mal formés
    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<ParsedSheet>;
}

// ==========================================
// FileImporter - point d'entrée asynchrone
// ==========================================
// Rôle : exécuter le pipeline d'import hors du fil
// interactif de l'application hôte
// Implémenté par : FileImporterImpl
#[async_trait]
pub trait FileImporter: Send + Sync {
    /// Importe un fichier en tâche de fond.
    ///
    /// Le pipeline (analyse, appariement, validation, coercition) est
    /// synchrone et lié au CPU : il s'exécute sur le pool bloquant pour
    /// ne jamais bloquer le fil appelant.
    ///
    /// # Retour
    /// - ImportReport : toujours, y compris pour un fichier illisible
    ///   (converti en erreur structurelle, jamais propagé)
    async fn import_file<P: AsRef<Path> + Send>(
        &self,
        path: P,
        schema: &[ColumnSchema],
    ) -> ImportReport;

    /// Importe plusieurs fichiers en parallèle.
    ///
    /// Chaque fichier est indépendant : l'échec de l'un n'affecte
    /// pas les autres.
    async fn batch_import<P: AsRef<Path> + Send + Sync>(
        &self,
        paths: Vec<P>,
        schema: &[ColumnSchema],
    ) -> Vec<ImportReport>;
}
