// ==========================================
// SGG Digital - Export texte délimité (CSV)
// ==========================================
// UTF-8 précédé d'une marque d'ordre des octets,
// champs protégés selon la convention CSV standard.
// ==========================================

use csv::WriterBuilder;
use tracing::{debug, instrument};

use crate::config::ExchangeConfig;
use crate::domain::value::Record;
use crate::exporter::error::{ExportError, ExportResult};
use crate::exporter::layout::build_grid;
use crate::exporter::options::{stamped_filename, ExportArtifact, ExportOptions};

/// Exporte des enregistrements en texte délimité par des virgules.
///
/// Le flux commence par une marque d'ordre des octets pour que les
/// tableurs courants le lisent sans ambiguïté en UTF-8. Tout champ
/// contenant une virgule, un guillemet ou un saut de ligne est protégé
/// par des guillemets, guillemets internes doublés.
#[instrument(skip(records, options, config), fields(records = records.len()))]
pub fn export_to_csv(
    records: &[Record],
    options: &ExportOptions,
    config: &ExchangeConfig,
) -> ExportResult<ExportArtifact> {
    let grid = build_grid(records, options, config);

    let mut buffer: Vec<u8> = Vec::new();
    buffer.extend_from_slice("\u{feff}".as_bytes());

    // flexible : les lignes de bandeau n'ont qu'un champ
    let mut writer = WriterBuilder::new().flexible(true).from_writer(buffer);
    for row in &grid.rows {
        if row.is_empty() {
            writer.write_record([""])?;
        } else {
            writer.write_record(row)?;
        }
    }

    let buffer = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    debug!(bytes = buffer.len(), "flux CSV sérialisé");

    Ok(ExportArtifact {
        filename: stamped_filename(&options.filename, "csv"),
        bytes: buffer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::{ColumnSchema, ColumnType};
    use crate::domain::value::CellValue;

    fn one_record(value: &str) -> Vec<Record> {
        let mut record = Record::new();
        record.insert("nom".to_string(), CellValue::Text(value.into()));
        vec![record]
    }

    fn options() -> ExportOptions {
        ExportOptions::new("liste")
            .without_timestamp()
            .columns(vec![ColumnSchema::new("nom", "Nom", ColumnType::Text)])
    }

    #[test]
    fn test_stream_starts_with_bom() {
        let artifact =
            export_to_csv(&one_record("Alpha"), &options(), &ExchangeConfig::default()).unwrap();

        assert_eq!(&artifact.bytes[..3], &[0xEF, 0xBB, 0xBF]);
        assert!(artifact.filename.ends_with(".csv"));
    }

    #[test]
    fn test_field_with_comma_and_quote_is_escaped() {
        let artifact = export_to_csv(
            &one_record(r#"Société "Alpha", SA"#),
            &options(),
            &ExchangeConfig::default(),
        )
        .unwrap();

        let text = String::from_utf8(artifact.bytes[3..].to_vec()).unwrap();
        // Champ protégé, guillemets internes doublés
        assert!(text.contains(r#""Société ""Alpha"", SA""#));
    }

    #[test]
    fn test_plain_field_is_not_quoted() {
        let artifact =
            export_to_csv(&one_record("Alpha"), &options(), &ExchangeConfig::default()).unwrap();

        let text = String::from_utf8(artifact.bytes[3..].to_vec()).unwrap();
        assert_eq!(text, "Nom\nAlpha\n");
    }
}
