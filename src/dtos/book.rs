//! Book DTOs - Data Transfer Objects per libri

use super::author::AuthorDTO;
use crate::entities::Book;
use serde::{Deserialize, Serialize};

/// Struct per gestire io col client.
/// L'autore, se presente, è l'oggetto completo e non un semplice riferimento.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BookDTO {
    pub isbn: Option<String>,
    pub title: Option<String>,
    pub author: Option<AuthorDTO>,
}

impl From<Book> for BookDTO {
    fn from(value: Book) -> Self {
        Self {
            isbn: Some(value.isbn),
            title: value.title,
            author: value.author.map(AuthorDTO::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Author;
    use serde_json::json;

    #[test]
    fn test_null_author_deserializes_as_none() {
        let dto: BookDTO = serde_json::from_value(json!({
            "isbn": "0124-8964-7552",
            "title": "Lettera al padre",
            "author": null
        }))
        .unwrap();
        assert_eq!(dto.author, None);
        assert_eq!(dto.title.as_deref(), Some("Lettera al padre"));
    }

    #[test]
    fn test_from_entity_nests_full_author() {
        let dto = BookDTO::from(Book {
            isbn: "1212-4545-7878".to_string(),
            title: Some("Testing in Java".to_string()),
            author: Some(Author {
                id: 1,
                name: Some("George Orwell".to_string()),
                age: Some(100),
                description: Some("britannico".to_string()),
            }),
        });
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["isbn"], "1212-4545-7878");
        assert_eq!(json["author"]["id"], 1);
        assert_eq!(json["author"]["name"], "George Orwell");
        assert_eq!(json["author"]["age"], 100);
        assert_eq!(json["author"]["description"], "britannico");
    }
}
