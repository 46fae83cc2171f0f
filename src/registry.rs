// ==========================================
// SGG Digital - Registre des schémas
// ==========================================
// Listes de colonnes déclaratives par type
// d'enregistrement du back-office. Données pures,
// unicité clé/libellé vérifiée à la construction.
// ==========================================

use std::collections::HashSet;

use crate::domain::schema::{ColumnSchema, ColumnType};

/// Schéma des institutions (ministères, organismes, agences).
pub fn institutions() -> Vec<ColumnSchema> {
    checked(
        "institutions",
        vec![
            ColumnSchema::new("nom", "Nom", ColumnType::Text)
                .required()
                .max_length(200),
            ColumnSchema::new("type", "Type", ColumnType::Text)
                .required()
                .allowed_values(&["ministere", "institution", "organisme", "agence"]),
            ColumnSchema::new("sigle", "Sigle", ColumnType::Text).max_length(20),
            ColumnSchema::new("responsable", "Responsable", ColumnType::Text),
            ColumnSchema::new("email", "Email", ColumnType::Email),
            ColumnSchema::new("telephone", "Téléphone", ColumnType::Text),
            ColumnSchema::new("adresse", "Adresse", ColumnType::Text),
            ColumnSchema::new("actif", "Actif", ColumnType::Boolean),
        ],
    )
}

/// Schéma des comptes utilisateurs.
pub fn users() -> Vec<ColumnSchema> {
    checked(
        "users",
        vec![
            ColumnSchema::new("email", "Email", ColumnType::Email).required(),
            ColumnSchema::new("prenom", "Prénom", ColumnType::Text).required(),
            ColumnSchema::new("nom", "Nom", ColumnType::Text).required(),
            ColumnSchema::new("role", "Rôle", ColumnType::Text).required(),
            ColumnSchema::new("institution", "Institution", ColumnType::Text),
            ColumnSchema::new("telephone", "Téléphone", ColumnType::Text),
            ColumnSchema::new("actif", "Actif", ColumnType::Boolean),
        ],
    )
}

/// Schéma des nominations (décrets).
pub fn nominations() -> Vec<ColumnSchema> {
    checked(
        "nominations",
        vec![
            ColumnSchema::new("nom", "Nom Complet", ColumnType::Text).required(),
            ColumnSchema::new("poste", "Poste", ColumnType::Text).required(),
            ColumnSchema::new("ministere", "Ministère", ColumnType::Text).required(),
            ColumnSchema::new("dateDecret", "Date Décret", ColumnType::Date),
            ColumnSchema::new("numerDecret", "N° Décret", ColumnType::Text),
            ColumnSchema::new("statut", "Statut", ColumnType::Text)
                .allowed_values(&["actif", "révoqué", "retraité"]),
        ],
    )
}

/// Recherche d'un schéma intégré par nom.
pub fn by_name(name: &str) -> Option<Vec<ColumnSchema>> {
    match name {
        "institutions" => Some(institutions()),
        "users" => Some(users()),
        "nominations" => Some(nominations()),
        _ => None,
    }
}

// Unicité des clés et libellés : défaillance immédiate à la
// construction, jamais une erreur d'import à l'exécution
fn checked(name: &str, columns: Vec<ColumnSchema>) -> Vec<ColumnSchema> {
    let mut keys = HashSet::new();
    let mut labels = HashSet::new();
    for col in &columns {
        assert!(
            keys.insert(col.key.to_lowercase()),
            "schéma {name}: clé dupliquée \"{}\"",
            col.key
        );
        assert!(
            labels.insert(col.label.to_lowercase()),
            "schéma {name}: libellé dupliqué \"{}\"",
            col.label
        );
    }
    columns
}
