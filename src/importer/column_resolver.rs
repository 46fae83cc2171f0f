// ==========================================
// SGG Digital - Appariement des colonnes
// ==========================================
// En-têtes réels du fichier → colonnes du schéma.
// Appariement élagué, insensible à la casse,
// libellé testé avant clé.
// ==========================================

use crate::domain::schema::ColumnSchema;
use crate::i18n;

/// Résultat de l'appariement des en-têtes d'un fichier.
#[derive(Debug, Clone)]
pub struct ResolvedColumns {
    /// Paires (en-tête du fichier, colonne du schéma), dans l'ordre du schéma.
    pub mapping: Vec<(String, ColumnSchema)>,
    /// Avertissements structurels : colonnes requises sans en-tête apparié.
    pub warnings: Vec<String>,
}

impl ResolvedColumns {
    /// Vrai si aucune colonne du schéma n'a trouvé d'en-tête.
    pub fn is_unusable(&self) -> bool {
        self.mapping.is_empty()
    }
}

/// Apparie les en-têtes d'un fichier aux colonnes d'un schéma.
///
/// Pour chaque colonne, le premier en-tête (ordre du fichier) dont la
/// forme élaguée en minuscules égale le libellé ou, à défaut, la clé,
/// l'emporte : tolérance délibérée envers les en-têtes localisés comme
/// envers les noms internes. Un en-tête dupliqué n'est pas signalé :
/// le premier gagne. Une colonne optionnelle sans en-tête est absente
/// en silence de chaque enregistrement produit.
pub fn resolve_columns(file_headers: &[String], schema: &[ColumnSchema]) -> ResolvedColumns {
    let mut mapping = Vec::new();
    let mut warnings = Vec::new();

    for col in schema {
        let label = col.label.trim().to_lowercase();
        let key = col.key.trim().to_lowercase();

        let matched = file_headers.iter().find(|h| {
            let header = h.trim().to_lowercase();
            header == label || header == key
        });

        match matched {
            Some(header) => mapping.push((header.clone(), col.clone())),
            None if col.required => warnings.push(i18n::t_with_args(
                "import.required_column_missing",
                &[("label", &col.label)],
            )),
            None => {}
        }
    }

    ResolvedColumns { mapping, warnings }
}
