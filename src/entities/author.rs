//! Author entity - Entità autore

use super::merge::{Merge, overwrite};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Author {
    pub id: i32,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub description: Option<String>,
}

/// Campi modificabili di un autore con un aggiornamento parziale
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorPatch {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub description: Option<String>,
}

impl AuthorPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.description.is_none()
    }
}

impl Merge<AuthorPatch> for Author {
    fn merge(&mut self, patch: AuthorPatch) {
        overwrite(&mut self.name, patch.name);
        overwrite(&mut self.age, patch.age);
        overwrite(&mut self.description, patch.description);
    }
}
