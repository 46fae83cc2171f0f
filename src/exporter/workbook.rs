// ==========================================
// SGG Digital - Export classeur Excel
// ==========================================
// rust_xlsxwriter : une feuille, bandeaux,
// largeurs de colonnes indicatives.
// ==========================================

use rust_xlsxwriter::Workbook;
use tracing::{debug, instrument};

use crate::config::ExchangeConfig;
use crate::domain::value::Record;
use crate::exporter::error::ExportResult;
use crate::exporter::layout::build_grid;
use crate::exporter::options::{stamped_filename, ExportArtifact, ExportOptions};

/// Exporte des enregistrements en classeur Excel (.xlsx).
///
/// Les octets produits et le nom daté sont remis à l'appelant ;
/// l'offre du fichier à l'utilisateur (téléchargement, écriture
/// disque) n'appartient pas au moteur.
#[instrument(skip(records, options, config), fields(records = records.len()))]
pub fn export_to_workbook(
    records: &[Record],
    options: &ExportOptions,
    config: &ExchangeConfig,
) -> ExportResult<ExportArtifact> {
    let grid = build_grid(records, options, config);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(
        options
            .sheet_name
            .as_deref()
            .unwrap_or(&config.default_sheet_name),
    )?;

    // Écriture des lignes (bandeaux compris)
    for (r, row) in grid.rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            worksheet.write_string(r as u32, c as u16, cell)?;
        }
    }

    // Largeurs de colonnes : aide de présentation uniquement
    for (c, width) in grid.widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *width as f64)?;
    }

    let bytes = workbook.save_to_buffer()?;
    debug!(bytes = bytes.len(), "classeur sérialisé");

    Ok(ExportArtifact {
        filename: stamped_filename(&options.filename, "xlsx"),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value::CellValue;

    #[test]
    fn test_workbook_bytes_are_zip() {
        let mut record = Record::new();
        record.insert("nom".to_string(), CellValue::Text("Alpha".into()));

        let artifact = export_to_workbook(
            &[record],
            &ExportOptions::new("liste"),
            &ExchangeConfig::default(),
        )
        .unwrap();

        // Un .xlsx est une archive zip : signature PK
        assert_eq!(&artifact.bytes[..2], b"PK");
        assert!(artifact.filename.ends_with(".xlsx"));
    }

    #[test]
    fn test_workbook_empty_records_still_builds() {
        let artifact = export_to_workbook(
            &[],
            &ExportOptions::new("vide").without_timestamp(),
            &ExchangeConfig::default(),
        )
        .unwrap();

        assert!(!artifact.bytes.is_empty());
    }
}
