// ==========================================
// Module d'internationalisation (i18n)
// ==========================================
// Bibliothèque rust-i18n
// Langue de repli : français (langue produit)
// ==========================================
// Note : la macro rust_i18n::i18n! est initialisée dans lib.rs.
// Seul locales/fr.yml est embarqué : quelle que soit la langue
// active, la résolution retombe sur le français.
// ==========================================

/// Langue courante.
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// Change la langue.
///
/// # Paramètres
/// - locale : code de langue (ex. "fr")
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// Traduit un message (sans paramètre).
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// Traduit un message avec paramètres interpolés.
///
/// # Exemple
/// ```no_run
/// use sgg_exchange::i18n::t_with_args;
/// let msg = t_with_args("import.required", &[("label", "Nom")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
