// ==========================================
// Initialisation de la journalisation
// ==========================================
// tracing et tracing-subscriber
// Niveau configurable par variable d'environnement
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise le système de journalisation.
///
/// # Variables d'environnement
/// - RUST_LOG : filtre de niveau (défaut : info)
///   ex. RUST_LOG=debug ou RUST_LOG=sgg_exchange=trace
///
/// # Exemple
/// ```no_run
/// use sgg_exchange::logging;
/// logging::init();
/// ```
pub fn init() {
    // Niveau lu depuis l'environnement, info par défaut
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Format des journaux
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Initialise la journalisation pour les tests.
///
/// Niveau plus verbeux, pratique pour le débogage.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
