// ==========================================
// SGG Digital - Tests d'import en tâche de fond
// ==========================================
// Le pipeline s'exécute hors du fil appelant ;
// les fichiers d'un lot sont indépendants.
// ==========================================

use std::io::Write;

use sgg_exchange::exporter::export_to_csv_async;
use sgg_exchange::{
    CellValue, ColumnSchema, ColumnType, ExchangeConfig, ExportOptions, FileImporter,
    FileImporterImpl, Record,
};

fn schema() -> Vec<ColumnSchema> {
    vec![
        ColumnSchema::new("nom", "Nom", ColumnType::Text).required(),
        ColumnSchema::new("actif", "Actif", ColumnType::Boolean),
    ]
}

fn write_csv(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("création du fichier temporaire");
    write!(file, "{content}").expect("écriture du fichier temporaire");
    file
}

#[tokio::test]
async fn test_import_file_off_thread() {
    sgg_exchange::logging::init_test();
    let file = write_csv("Nom,Actif\nAlpha,oui\n");

    let importer = FileImporterImpl;
    let report = importer.import_file(file.path(), &schema()).await;

    assert!(report.success);
    assert_eq!(report.valid_rows, 1);
}

#[tokio::test]
async fn test_export_off_thread() {
    let mut record = Record::new();
    record.insert("nom".to_string(), CellValue::Text("Alpha".into()));

    let options = ExportOptions::new("liste").without_timestamp();
    let artifact = export_to_csv_async(vec![record], options, ExchangeConfig::default())
        .await
        .expect("export en tâche de fond");

    assert!(artifact.filename.ends_with(".csv"));
    assert_eq!(&artifact.bytes[..3], &[0xEF, 0xBB, 0xBF]);
}

#[tokio::test]
async fn test_batch_import_files_are_independent() {
    let good = write_csv("Nom,Actif\nAlpha,oui\nBeta,non\n");
    let bad = write_csv("Nom,Actif\n,oui\n");

    let importer = FileImporterImpl;
    let reports = importer
        .batch_import(vec![good.path(), bad.path()], &schema())
        .await;

    assert_eq!(reports.len(), 2);
    // L'échec du second fichier n'affecte pas le premier
    assert!(reports[0].success);
    assert_eq!(reports[0].valid_rows, 2);
    assert!(!reports[1].success);
    assert_eq!(reports[1].skipped_rows, 1);
}

#[tokio::test]
async fn test_batch_import_missing_file_yields_structural_report() {
    let good = write_csv("Nom,Actif\nAlpha,oui\n");

    let importer = FileImporterImpl;
    let reports = importer
        .batch_import(
            vec![
                good.path().to_path_buf(),
                std::path::PathBuf::from("inexistant.csv"),
            ],
            &schema(),
        )
        .await;

    assert!(reports[0].success);
    assert!(!reports[1].success);
    assert_eq!(reports[1].errors[0].row, 0);
}
