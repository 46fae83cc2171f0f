// ==========================================
// SGG Digital - Analyseurs de fichiers
// ==========================================
// Étape 0 du pipeline : octets → grille de cellules
// Formats : Excel (.xlsx/.xls) / CSV (.csv)
// ==========================================

use calamine::{open_workbook_auto_from_rs, Reader};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::FileParser;

// Marque d'ordre des octets UTF-8, tolérée en tête de flux CSV
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

// ==========================================
// ParsedSheet - grille générique
// ==========================================

/// Résultat de l'analyse structurelle d'un fichier.
///
/// Une ligne associative par ligne de données, indexée par les
/// en-têtes littéraux de la première ligne du fichier ; la liste
/// ordonnée des en-têtes est conservée pour l'appariement.
#[derive(Debug, Clone, Default)]
pub struct ParsedSheet {
    /// En-têtes de la première ligne, dans l'ordre du fichier, élagués.
    pub headers: Vec<String>,
    /// Lignes de données ; une cellule absente équivaut à une chaîne vide.
    pub rows: Vec<HashMap<String, String>>,
}

// ==========================================
// CsvParser
// ==========================================

pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<ParsedSheet> {
        // Tolérer une marque d'ordre des octets en tête
        let bytes = bytes.strip_prefix(&UTF8_BOM[..]).unwrap_or(bytes);

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // longueurs de ligne inégales admises
            .from_reader(bytes);

        // Lecture des en-têtes
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // Lecture des lignes
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row.insert(header.clone(), value.trim().to_string());
                }
            }

            // Ignorer les lignes entièrement vides
            if row.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row);
        }

        Ok(ParsedSheet { headers, rows })
    }
}

// ==========================================
// ExcelParser
// ==========================================

pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<ParsedSheet> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
            .map_err(|e| ImportError::WorkbookParse(e.to_string()))?;

        // Seule la première feuille est lue
        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::EmptyWorkbook);
        }

        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::WorkbookParse(e.to_string()))?;

        // En-têtes : première ligne de la plage
        let mut range_rows = range.rows();
        let Some(header_row) = range_rows.next() else {
            return Ok(ParsedSheet::default());
        };

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        // Lignes de données
        let mut rows = Vec::new();
        for data_row in range_rows {
            let mut row = HashMap::new();

            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row.insert(header.clone(), cell.to_string().trim().to_string());
                }
            }

            // Ignorer les lignes entièrement vides
            if row.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row);
        }

        Ok(ParsedSheet { headers, rows })
    }
}

// ==========================================
// UniversalFileParser - choix par extension
// ==========================================

pub struct UniversalFileParser;

impl UniversalFileParser {
    /// Analyse un fichier sur disque, format choisi par extension.
    pub fn parse_path<P: AsRef<Path>>(&self, path: P) -> ImportResult<ParsedSheet> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let bytes = std::fs::read(path)?;
        match ext.as_str() {
            "csv" => CsvParser.parse_bytes(&bytes),
            "xlsx" | "xls" => ExcelParser.parse_bytes(&bytes),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_parser_basic() {
        let bytes = "Nom,Actif\nAlpha,oui\nBeta,non\n".as_bytes();
        let sheet = CsvParser.parse_bytes(bytes).unwrap();

        assert_eq!(sheet.headers, vec!["Nom", "Actif"]);
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[0].get("Nom"), Some(&"Alpha".to_string()));
        assert_eq!(sheet.rows[1].get("Actif"), Some(&"non".to_string()));
    }

    #[test]
    fn test_csv_parser_strips_bom() {
        let bytes = "\u{feff}Nom\nAlpha\n".as_bytes();
        let sheet = CsvParser.parse_bytes(bytes).unwrap();

        assert_eq!(sheet.headers, vec!["Nom"]);
    }

    #[test]
    fn test_csv_parser_skips_blank_rows() {
        let bytes = "Nom,Actif\nAlpha,oui\n,\nBeta,non\n".as_bytes();
        let sheet = CsvParser.parse_bytes(bytes).unwrap();

        assert_eq!(sheet.rows.len(), 2);
    }

    #[test]
    fn test_csv_parser_trims_cells_and_headers() {
        let bytes = " Nom , Actif \n  Alpha , oui \n".as_bytes();
        let sheet = CsvParser.parse_bytes(bytes).unwrap();

        assert_eq!(sheet.headers, vec!["Nom", "Actif"]);
        assert_eq!(sheet.rows[0].get("Nom"), Some(&"Alpha".to_string()));
    }

    #[test]
    fn test_csv_parser_short_row_reads_missing_as_absent() {
        let bytes = "Nom,Actif\nAlpha\n".as_bytes();
        let sheet = CsvParser.parse_bytes(bytes).unwrap();

        assert_eq!(sheet.rows.len(), 1);
        assert_eq!(sheet.rows[0].get("Actif"), None);
    }

    #[test]
    fn test_excel_parser_rejects_garbage() {
        let result = ExcelParser.parse_bytes(b"pas un classeur");
        assert!(matches!(result, Err(ImportError::WorkbookParse(_))));
    }

    #[test]
    fn test_universal_parser_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("donnees.txt");
        std::fs::write(&path, "Nom\nAlpha\n").unwrap();

        let result = UniversalFileParser.parse_path(&path);
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_universal_parser_file_not_found() {
        let result = UniversalFileParser.parse_path("inexistant.csv");
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }
}
