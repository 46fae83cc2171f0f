// ==========================================
// SGG Digital - Import en ligne de commande
// ==========================================
// Importe un fichier contre un schéma du registre
// et affiche le rapport. Outil d'exploitation,
// la logique vit dans la bibliothèque.
// ==========================================

use std::process::ExitCode;

use sgg_exchange::{logging, registry};

fn main() -> ExitCode {
    logging::init();

    let mut args = std::env::args().skip(1);
    let (schema_name, file) = match (args.next(), args.next()) {
        (Some(schema), Some(file)) => (schema, file),
        _ => {
            eprintln!("usage: sgg-exchange <institutions|users|nominations> <fichier>");
            return ExitCode::from(2);
        }
    };

    let Some(schema) = registry::by_name(&schema_name) else {
        eprintln!("schéma inconnu: {schema_name}");
        return ExitCode::from(2);
    };

    tracing::info!(
        version = sgg_exchange::VERSION,
        schema = %schema_name,
        file = %file,
        "démarrage de l'import"
    );

    let report = sgg_exchange::import_path(&file, &schema);

    println!(
        "{} lignes, {} valides, {} ignorées",
        report.total_rows, report.valid_rows, report.skipped_rows
    );
    for warning in &report.warnings {
        println!("avertissement: {warning}");
    }
    for error in &report.errors {
        println!("ligne {} [{}] {}", error.row, error.column, error.message);
    }

    if report.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
