// ==========================================
// SGG Digital - Mise en page d'export
// ==========================================
// Logique partagée des deux formats : bandeaux,
// ligne d'en-tête, rendu des cellules, indications
// de largeur de colonne.
// ==========================================

use chrono::Local;

use crate::config::ExchangeConfig;
use crate::domain::value::{CellValue, Record};
use crate::exporter::options::ExportOptions;
use crate::i18n;

/// Grille d'export rendue : lignes de bandeau, d'en-tête et de données,
/// toutes les cellules déjà coercées en chaînes d'affichage.
#[derive(Debug, Clone)]
pub(crate) struct ExportGrid {
    /// Toutes les lignes, dans l'ordre de sortie.
    pub rows: Vec<Vec<String>>,
    /// Indication de largeur par colonne de données (présentation
    /// seulement, utilisée par le classeur).
    pub widths: Vec<usize>,
}

/// Construit la grille commune aux deux formats.
///
/// Ordre fixe des bandeaux présents : titre, ligne vide, horodatage,
/// ligne vide, puis en-têtes et une ligne par enregistrement. Les
/// libellés viennent de `options.columns`, à défaut des clés du premier
/// enregistrement (des enregistrements hétérogènes sans schéma explicite
/// produisent donc quand même un en-tête).
pub(crate) fn build_grid(
    records: &[Record],
    options: &ExportOptions,
    config: &ExchangeConfig,
) -> ExportGrid {
    // En-têtes et clés d'accès
    let (headers, keys): (Vec<String>, Vec<String>) = match &options.columns {
        Some(columns) => columns
            .iter()
            .map(|c| (c.label.clone(), c.key.clone()))
            .unzip(),
        None => {
            let keys: Vec<String> = records
                .first()
                .map(|r| r.keys().cloned().collect())
                .unwrap_or_default();
            (keys.clone(), keys)
        }
    };

    let mut rows: Vec<Vec<String>> = Vec::new();

    // Bandeau de titre
    if let Some(title) = &options.title {
        rows.push(vec![title.clone()]);
        rows.push(Vec::new());
    }

    // Bandeau d'horodatage
    if options.include_timestamp {
        let date = Local::now()
            .format_localized("%d %B %Y %H:%M", chrono::Locale::fr_FR)
            .to_string();
        rows.push(vec![i18n::t_with_args("export.stamp", &[("date", &date)])]);
        rows.push(Vec::new());
    }

    // Ligne d'en-tête
    rows.push(headers.clone());

    // Lignes de données
    for record in records {
        rows.push(
            keys.iter()
                .map(|key| record.get(key).map(CellValue::display).unwrap_or_default())
                .collect(),
        );
    }

    // Largeurs : max(en-tête, cellules) + marge, plafonné
    let widths = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let cell_max = records
                .iter()
                .map(|r| {
                    r.get(&keys[i])
                        .map(|v| v.display().chars().count())
                        .unwrap_or(0)
                })
                .max()
                .unwrap_or(0);
            (header.chars().count().max(cell_max) + config.width_padding).min(config.width_cap)
        })
        .collect();

    ExportGrid { rows, widths }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::{ColumnSchema, ColumnType};

    fn record(pairs: &[(&str, CellValue)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_banner_order_title_blank_stamp_blank_header() {
        let records = vec![record(&[("nom", CellValue::Text("Alpha".into()))])];
        let options = ExportOptions::new("liste")
            .title("Liste des institutions")
            .columns(vec![ColumnSchema::new("nom", "Nom", ColumnType::Text)]);

        let grid = build_grid(&records, &options, &ExchangeConfig::default());

        assert_eq!(grid.rows[0], vec!["Liste des institutions".to_string()]);
        assert!(grid.rows[1].is_empty());
        assert!(grid.rows[2][0].starts_with("Exporté le "));
        assert!(grid.rows[3].is_empty());
        assert_eq!(grid.rows[4], vec!["Nom".to_string()]);
        assert_eq!(grid.rows[5], vec!["Alpha".to_string()]);
    }

    #[test]
    fn test_headers_inferred_from_first_record_keys() {
        let records = vec![record(&[
            ("actif", CellValue::Bool(true)),
            ("nom", CellValue::Text("Alpha".into())),
        ])];
        let options = ExportOptions::new("liste").without_timestamp();

        let grid = build_grid(&records, &options, &ExchangeConfig::default());

        // Clés en ordre déterministe (BTreeMap)
        assert_eq!(grid.rows[0], vec!["actif".to_string(), "nom".to_string()]);
        assert_eq!(grid.rows[1], vec!["Oui".to_string(), "Alpha".to_string()]);
    }

    #[test]
    fn test_missing_value_renders_empty() {
        let records = vec![
            record(&[("nom", CellValue::Text("Alpha".into()))]),
            record(&[]),
        ];
        let options = ExportOptions::new("liste")
            .without_timestamp()
            .columns(vec![ColumnSchema::new("nom", "Nom", ColumnType::Text)]);

        let grid = build_grid(&records, &options, &ExchangeConfig::default());

        assert_eq!(grid.rows[2], vec!["".to_string()]);
    }

    #[test]
    fn test_width_hint_formula() {
        let records = vec![record(&[(
            "nom",
            CellValue::Text("Institution Nationale".into()),
        )])];
        let options = ExportOptions::new("liste")
            .without_timestamp()
            .columns(vec![ColumnSchema::new("nom", "Nom", ColumnType::Text)]);

        let grid = build_grid(&records, &options, &ExchangeConfig::default());

        // max(3, 21) + 2
        assert_eq!(grid.widths, vec![23]);
    }

    #[test]
    fn test_width_hint_capped_at_fifty() {
        let records = vec![record(&[("nom", CellValue::Text("x".repeat(120)))])];
        let options = ExportOptions::new("liste")
            .without_timestamp()
            .columns(vec![ColumnSchema::new("nom", "Nom", ColumnType::Text)]);

        let grid = build_grid(&records, &options, &ExchangeConfig::default());

        assert_eq!(grid.widths, vec![50]);
    }
}
