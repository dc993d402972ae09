//! BookRepository - Repository per la gestione dei libri

use super::{AuthorRepository, Delete, Exists, Read, ReadAll, Save, Update};
use crate::dtos::{AuthorDTO, BookDTO};
use crate::entities::{Author, Book, BookPatch, BookRow, Merge};
use sqlx::{Error, Executor, Sqlite, SqliteConnection, SqlitePool};
use tracing::{debug, info, instrument};

// Ogni libro viene letto insieme al suo autore (se presente)
const SELECT_BOOK: &str = r#"
    SELECT
        b.isbn,
        b.title,
        a.id AS author_id,
        a.name AS author_name,
        a.age AS author_age,
        a.description AS author_description
    FROM books b
    LEFT JOIN authors a ON a.id = b.author_id
"#;

// BOOK REPOSITORY
pub struct BookRepository {
    connection_pool: SqlitePool,
}

impl BookRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }
}

async fn find<'e, E>(executor: E, isbn: &str) -> Result<Option<Book>, Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, BookRow>(&format!("{SELECT_BOOK} WHERE b.isbn = ?"))
        .bind(isbn)
        .fetch_optional(executor)
        .await?;

    Ok(row.map(Book::from))
}

/// Persiste l'autore annidato prima del libro che lo referenzia
async fn cascade_author(
    conn: &mut SqliteConnection,
    author: Option<&AuthorDTO>,
) -> Result<Option<Author>, Error> {
    match author {
        Some(data) => Ok(Some(AuthorRepository::save_cascade(conn, data).await?)),
        None => Ok(None),
    }
}

impl Read<Book, String> for BookRepository {
    #[instrument(skip(self), fields(isbn = %isbn))]
    async fn read(&self, isbn: &String) -> Result<Option<Book>, Error> {
        debug!("Reading book by isbn");
        let book = find(&self.connection_pool, isbn).await?;

        if book.is_some() {
            debug!("Book found");
        } else {
            debug!("Book not found");
        }

        Ok(book)
    }
}

impl ReadAll<Book> for BookRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Book>, Error> {
        let books: Vec<Book> = sqlx::query_as::<_, BookRow>(SELECT_BOOK)
            .fetch_all(&self.connection_pool)
            .await?
            .into_iter()
            .map(Book::from)
            .collect();

        debug!("Loaded {} books", books.len());
        Ok(books)
    }
}

impl Exists<String> for BookRepository {
    #[instrument(skip(self), fields(isbn = %isbn))]
    async fn exists(&self, isbn: &String) -> Result<bool, Error> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM books WHERE isbn = ?")
            .bind(isbn.as_str())
            .fetch_one(&self.connection_pool)
            .await?;

        Ok(count > 0)
    }
}

impl Save<Book, BookDTO, String> for BookRepository {
    /// Upsert del libro: l'isbn del path vince su quello del body,
    /// l'autore annidato viene salvato nella stessa transazione.
    #[instrument(skip(self, data), fields(isbn = %isbn))]
    async fn save(&self, isbn: &String, data: &BookDTO) -> Result<Book, Error> {
        debug!("Saving book");
        let mut tx = self.connection_pool.begin().await?;

        let author = cascade_author(&mut *tx, data.author.as_ref()).await?;

        sqlx::query(
            r#"
            INSERT INTO books (isbn, title, author_id)
            VALUES (?, ?, ?)
            ON CONFLICT (isbn) DO UPDATE SET
                title = excluded.title,
                author_id = excluded.author_id
            "#,
        )
        .bind(isbn.as_str())
        .bind(data.title.as_deref())
        .bind(author.as_ref().map(|a| a.id))
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!("Book saved");
        Ok(Book {
            isbn: isbn.clone(),
            title: data.title.clone(),
            author,
        })
    }
}

impl Update<Book, BookDTO, String> for BookRepository {
    #[instrument(skip(self, data), fields(isbn = %isbn))]
    async fn update(&self, isbn: &String, data: &BookDTO) -> Result<Option<Book>, Error> {
        debug!("Updating book");
        let mut tx = self.connection_pool.begin().await?;

        let Some(mut book) = find(&mut *tx, isbn).await? else {
            debug!("Book not found, nothing to update");
            return Ok(None);
        };

        let author = cascade_author(&mut *tx, data.author.as_ref()).await?;

        book.merge(BookPatch {
            title: data.title.clone(),
            author,
        });

        sqlx::query("UPDATE books SET title = ?, author_id = ? WHERE isbn = ?")
            .bind(book.title.as_deref())
            .bind(book.author.as_ref().map(|a| a.id))
            .bind(book.isbn.as_str())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!("Book updated");
        Ok(Some(book))
    }
}

impl Delete<String> for BookRepository {
    #[instrument(skip(self), fields(isbn = %isbn))]
    async fn delete(&self, isbn: &String) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM books WHERE isbn = ?")
            .bind(isbn.as_str())
            .execute(&self.connection_pool)
            .await?;

        debug!("Deleted {} book rows", result.rows_affected());
        Ok(())
    }
}
