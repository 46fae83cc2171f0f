// ==========================================
// SGG Digital - Orchestrateur d'import
// ==========================================
// Pipeline complet : analyse → appariement →
// validation → coercition → agrégation.
// Échec partiel ligne par ligne ; tout résultat
// est une donnée du rapport, jamais une exception.
// ==========================================

use async_trait::async_trait;
use futures::future::join_all;
use std::path::Path;
use tracing::{debug, error, info, instrument, warn};

use crate::domain::report::{ImportReport, Severity, ValidationError};
use crate::domain::schema::ColumnSchema;
use crate::domain::value::Record;
use crate::i18n;
use crate::importer::cell_validator::validate_cell;
use crate::importer::column_resolver::resolve_columns;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::{ParsedSheet, UniversalFileParser};
use crate::importer::importer_trait::{FileImporter, FileParser};

// ==========================================
// Pipeline synchrone
// ==========================================

/// Importe une feuille déjà analysée contre un schéma.
///
/// Cœur du pipeline, pur et synchrone : une ligne portant un diagnostic
/// de gravité erreur est exclue des enregistrements et comptée ignorée ;
/// les avertissements conservent la ligne. La coercition s'applique dans
/// tous les cas, un enregistrement reste donc toujours constructible.
#[instrument(skip(sheet, schema), fields(rows = sheet.rows.len()))]
pub fn import_sheet(sheet: &ParsedSheet, schema: &[ColumnSchema]) -> ImportReport {
    // Aucune ligne de données
    if sheet.rows.is_empty() {
        debug!("aucune ligne de données dans le fichier");
        return ImportReport::empty(i18n::t("import.no_data"));
    }

    // Appariement des colonnes, une seule fois
    let resolved = resolve_columns(&sheet.headers, schema);
    let warnings = resolved.warnings.clone();
    let total_rows = sheet.rows.len();

    // Aucune colonne exploitable : court-circuit structurel
    if resolved.is_unusable() {
        warn!(total_rows, "aucune colonne du schéma appariée");
        return ImportReport {
            success: false,
            data: Vec::new(),
            errors: vec![ValidationError {
                row: 0,
                column: "-".to_string(),
                value: "-".to_string(),
                message: i18n::t("import.no_matching_columns"),
                severity: Severity::Error,
            }],
            warnings,
            total_rows,
            valid_rows: 0,
            skipped_rows: total_rows,
        };
    }

    // Validation et coercition ligne par ligne
    let mut data: Vec<Record> = Vec::new();
    let mut errors: Vec<ValidationError> = Vec::new();
    let mut skipped = 0usize;

    for (i, row) in sheet.rows.iter().enumerate() {
        // +2 : numérotation 1-based plus la ligne d'en-tête
        let row_number = i + 2;
        let mut record = Record::new();
        let mut row_valid = true;

        for (header, col) in &resolved.mapping {
            let raw = row.get(header).map(String::as_str).unwrap_or("");

            if let Some(diag) = validate_cell(raw, col, row_number) {
                if diag.severity == Severity::Error {
                    row_valid = false;
                }
                errors.push(diag);
            }

            record.insert(col.key.clone(), col.coerce(raw));
        }

        if row_valid {
            data.push(record);
        } else {
            skipped += 1;
        }
    }

    let error_count = errors
        .iter()
        .filter(|e| e.severity == Severity::Error)
        .count();

    info!(
        total_rows,
        valid_rows = data.len(),
        skipped_rows = skipped,
        errors = error_count,
        "import terminé"
    );

    ImportReport {
        success: error_count == 0,
        valid_rows: data.len(),
        data,
        errors,
        warnings,
        total_rows,
        skipped_rows: skipped,
    }
}

/// Importe des octets bruts avec l'analyseur fourni.
///
/// Une défaillance d'analyse est convertie en erreur structurelle du
/// rapport : rien ne traverse cette frontière sous forme d'exception.
pub fn import_bytes(
    parser: &dyn FileParser,
    bytes: &[u8],
    schema: &[ColumnSchema],
) -> ImportReport {
    report_from_parse(parser.parse_bytes(bytes), schema)
}

/// Importe un fichier sur disque, format choisi par extension.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn import_path<P: AsRef<Path>>(path: P, schema: &[ColumnSchema]) -> ImportReport {
    report_from_parse(UniversalFileParser.parse_path(path), schema)
}

// Conversion du résultat d'analyse en rapport
fn report_from_parse(parsed: ImportResult<ParsedSheet>, schema: &[ColumnSchema]) -> ImportReport {
    match parsed {
        Ok(sheet) => import_sheet(&sheet, schema),
        Err(ImportError::EmptyWorkbook) => {
            debug!("classeur sans feuille");
            ImportReport::empty(i18n::t("import.empty_file"))
        }
        Err(e) => {
            error!(error = %e, "analyse du fichier impossible");
            ImportReport::structural_failure(e.to_string())
        }
    }
}

// ==========================================
// FileImporterImpl - point d'entrée asynchrone
// ==========================================

/// Implémentation de référence du point d'entrée asynchrone.
///
/// Le pipeline, lié au CPU, s'exécute sur le pool bloquant de tokio pour
/// ne jamais bloquer le fil interactif de l'application hôte, même sur
/// des fichiers de plusieurs milliers de lignes. L'abandon se réduit à
/// lâcher le futur : le moteur ne retient aucune ressource.
pub struct FileImporterImpl;

#[async_trait]
impl FileImporter for FileImporterImpl {
    async fn import_file<P: AsRef<Path> + Send>(
        &self,
        path: P,
        schema: &[ColumnSchema],
    ) -> ImportReport {
        let path = path.as_ref().to_owned();
        let schema = schema.to_vec();

        match tokio::task::spawn_blocking(move || import_path(&path, &schema)).await {
            Ok(report) => report,
            Err(e) => {
                error!(error = %e, "tâche d'import interrompue");
                ImportReport::structural_failure(e.to_string())
            }
        }
    }

    async fn batch_import<P: AsRef<Path> + Send + Sync>(
        &self,
        paths: Vec<P>,
        schema: &[ColumnSchema],
    ) -> Vec<ImportReport> {
        info!(count = paths.len(), "import par lot");

        let tasks = paths.iter().map(|path| self.import_file(path, schema));
        let reports = join_all(tasks).await;

        info!(
            total = reports.len(),
            success = reports.iter().filter(|r| r.success).count(),
            "import par lot terminé"
        );

        reports
    }
}
