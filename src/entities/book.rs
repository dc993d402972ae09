//! Book entity - Entità libro con riferimento opzionale all'autore

use super::author::Author;
use super::merge::{Merge, overwrite};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Book {
    pub isbn: String,
    pub title: Option<String>,
    pub author: Option<Author>,
}

/// Riga della tabella `books` unita (LEFT JOIN) con l'eventuale autore
#[derive(Debug, sqlx::FromRow)]
pub struct BookRow {
    pub isbn: String,
    pub title: Option<String>,
    pub author_id: Option<i32>,
    pub author_name: Option<String>,
    pub author_age: Option<i32>,
    pub author_description: Option<String>,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        let author = row.author_id.map(|id| Author {
            id,
            name: row.author_name,
            age: row.author_age,
            description: row.author_description,
        });

        Self {
            isbn: row.isbn,
            title: row.title,
            author,
        }
    }
}

/// Campi modificabili di un libro con un aggiornamento parziale.
/// L'autore viene sostituito per intero, mai fuso campo per campo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<Author>,
}

impl Merge<BookPatch> for Book {
    fn merge(&mut self, patch: BookPatch) {
        overwrite(&mut self.title, patch.title);
        overwrite(&mut self.author, patch.author);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kafka() -> Author {
        Author {
            id: 7,
            name: Some("Franz Kafka".to_string()),
            age: Some(40),
            description: None,
        }
    }

    fn lettera() -> Book {
        Book {
            isbn: "0124-8964-7552".to_string(),
            title: Some("Lettera al padre".to_string()),
            author: Some(kafka()),
        }
    }

    #[test]
    fn test_row_without_author() {
        let book = Book::from(BookRow {
            isbn: "978-1-2345-6789-2".to_string(),
            title: Some("The Last Ember".to_string()),
            author_id: None,
            author_name: None,
            author_age: None,
            author_description: None,
        });
        assert_eq!(book.author, None);
        assert_eq!(book.title.as_deref(), Some("The Last Ember"));
    }

    #[test]
    fn test_row_with_author() {
        let book = Book::from(BookRow {
            isbn: "0124-8964-7552".to_string(),
            title: Some("Lettera al padre".to_string()),
            author_id: Some(7),
            author_name: Some("Franz Kafka".to_string()),
            author_age: Some(40),
            author_description: None,
        });
        assert_eq!(book, lettera());
    }

    #[test]
    fn test_merge_title_keeps_author() {
        let mut book = lettera();
        book.merge(BookPatch {
            title: Some("UPDATED".to_string()),
            author: None,
        });
        assert_eq!(book.title.as_deref(), Some("UPDATED"));
        assert_eq!(book.author, Some(kafka()));
    }

    #[test]
    fn test_merge_replaces_author_wholesale() {
        let mut book = lettera();
        let replacement = Author {
            id: 8,
            name: Some("Max Brod".to_string()),
            age: None,
            description: None,
        };
        book.merge(BookPatch {
            title: None,
            author: Some(replacement.clone()),
        });
        assert_eq!(book.title.as_deref(), Some("Lettera al padre"));
        assert_eq!(book.author, Some(replacement));
    }
}
