//! Author DTOs - Data Transfer Objects per autori

use crate::entities::{Author, AuthorPatch};
use serde::{Deserialize, Serialize};

/// Struct per gestire io col client, usata sia in ingresso che in uscita.
/// In ingresso l'id viene ignorato (create) o preso dal path (update).
/// Nessun vincolo sui valori: qualunque età o testo viene salvato così com'è.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AuthorDTO {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub description: Option<String>,
}

impl From<Author> for AuthorDTO {
    fn from(value: Author) -> Self {
        Self {
            id: Some(value.id),
            name: value.name,
            age: value.age,
            description: value.description,
        }
    }
}

impl From<AuthorDTO> for AuthorPatch {
    fn from(value: AuthorDTO) -> Self {
        // l'id non fa parte del patch: viene sempre dal path
        Self {
            name: value.name,
            age: value.age,
            description: value.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let dto: AuthorDTO = serde_json::from_value(json!({ "name": "UPDATED" })).unwrap();
        assert_eq!(dto.id, None);
        assert_eq!(dto.name.as_deref(), Some("UPDATED"));
        assert_eq!(dto.age, None);
        assert_eq!(dto.description, None);
    }

    #[test]
    fn test_from_entity_exposes_id() {
        let dto = AuthorDTO::from(Author {
            id: 3,
            name: Some("Jesse A Casey".to_string()),
            age: Some(24),
            description: None,
        });
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "Jesse A Casey");
        assert_eq!(json["age"], 24);
        assert!(json["description"].is_null());
    }

    #[test]
    fn test_patch_drops_id() {
        let patch = AuthorPatch::from(AuthorDTO {
            id: Some(99),
            name: None,
            age: Some(30),
            description: None,
        });
        assert_eq!(
            patch,
            AuthorPatch {
                name: None,
                age: Some(30),
                description: None,
            }
        );
    }

    #[test]
    fn test_negative_age_is_kept_as_is() {
        let dto: AuthorDTO = serde_json::from_value(json!({ "name": "X", "age": -1 })).unwrap();
        assert_eq!(AuthorPatch::from(dto).age, Some(-1));
    }
}
