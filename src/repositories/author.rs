//! AuthorRepository - Repository per la gestione degli autori

use super::{Create, Delete, Exists, Read, ReadAll, Save, Update};
use crate::dtos::AuthorDTO;
use crate::entities::{Author, AuthorPatch, Merge};
use sqlx::{Error, Executor, Sqlite, SqliteConnection, SqlitePool};
use tracing::{debug, info, instrument};

// AUTHOR REPOSITORY
pub struct AuthorRepository {
    connection_pool: SqlitePool,
}

impl AuthorRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Salva l'autore annidato in un libro, dentro la transazione del libro.
    /// Se l'id esiste già la riga viene sovrascritta per intero,
    /// altrimenti viene inserito un nuovo autore con id generato.
    #[instrument(skip(conn, data), fields(author_id = ?data.id))]
    pub(crate) async fn save_cascade(
        conn: &mut SqliteConnection,
        data: &AuthorDTO,
    ) -> Result<Author, Error> {
        if let Some(id) = data.id {
            let replaced = sqlx::query_as::<_, Author>(
                r#"
                UPDATE authors
                SET name = ?, age = ?, description = ?
                WHERE id = ?
                RETURNING id, name, age, description
                "#,
            )
            .bind(data.name.as_deref())
            .bind(data.age)
            .bind(data.description.as_deref())
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;

            if let Some(author) = replaced {
                debug!("Cascaded author overwritten");
                return Ok(author);
            }
            debug!("Cascaded author id not found, inserting a new one");
        }

        insert(&mut *conn, data).await
    }
}

async fn insert<'e, E>(executor: E, data: &AuthorDTO) -> Result<Author, Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let author = sqlx::query_as::<_, Author>(
        r#"
        INSERT INTO authors (name, age, description)
        VALUES (?, ?, ?)
        RETURNING id, name, age, description
        "#,
    )
    .bind(data.name.as_deref())
    .bind(data.age)
    .bind(data.description.as_deref())
    .fetch_one(executor)
    .await?;

    info!("Author created with id {}", author.id);
    Ok(author)
}

async fn find<'e, E>(executor: E, id: i32) -> Result<Option<Author>, Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Author>("SELECT id, name, age, description FROM authors WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await
}

impl Create<Author, AuthorDTO> for AuthorRepository {
    #[instrument(skip(self, data))]
    async fn create(&self, data: &AuthorDTO) -> Result<Author, Error> {
        debug!("Creating new author");
        insert(&self.connection_pool, data).await
    }
}

impl Read<Author, i32> for AuthorRepository {
    #[instrument(skip(self), fields(author_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Author>, Error> {
        debug!("Reading author by id");
        let author = find(&self.connection_pool, *id).await?;

        if author.is_some() {
            debug!("Author found");
        } else {
            debug!("Author not found");
        }

        Ok(author)
    }
}

impl ReadAll<Author> for AuthorRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Author>, Error> {
        let authors = sqlx::query_as::<_, Author>("SELECT id, name, age, description FROM authors")
            .fetch_all(&self.connection_pool)
            .await?;

        debug!("Loaded {} authors", authors.len());
        Ok(authors)
    }
}

impl Exists<i32> for AuthorRepository {
    #[instrument(skip(self), fields(author_id = %id))]
    async fn exists(&self, id: &i32) -> Result<bool, Error> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM authors WHERE id = ?")
            .bind(*id)
            .fetch_one(&self.connection_pool)
            .await?;

        Ok(count > 0)
    }
}

impl Save<Author, AuthorDTO, i32> for AuthorRepository {
    /// Full replace: ogni campo del DTO (anche assente) sovrascrive quello salvato.
    /// L'id del DTO viene ignorato, conta solo quello passato.
    #[instrument(skip(self, data), fields(author_id = %id))]
    async fn save(&self, id: &i32, data: &AuthorDTO) -> Result<Author, Error> {
        debug!("Saving author");
        let author = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (id, name, age, description)
            VALUES (?, ?, ?, ?)
            ON CONFLICT (id) DO UPDATE SET
                name = excluded.name,
                age = excluded.age,
                description = excluded.description
            RETURNING id, name, age, description
            "#,
        )
        .bind(*id)
        .bind(data.name.as_deref())
        .bind(data.age)
        .bind(data.description.as_deref())
        .fetch_one(&self.connection_pool)
        .await?;

        info!("Author saved");
        Ok(author)
    }
}

impl Update<Author, AuthorPatch, i32> for AuthorRepository {
    #[instrument(skip(self, data), fields(author_id = %id))]
    async fn update(&self, id: &i32, data: &AuthorPatch) -> Result<Option<Author>, Error> {
        debug!("Updating author");
        let mut tx = self.connection_pool.begin().await?;

        let Some(mut author) = find(&mut *tx, *id).await? else {
            debug!("Author not found, nothing to update");
            return Ok(None);
        };

        // If no fields to update, return current author
        if data.is_empty() {
            debug!("No fields to update, returning current author");
            return Ok(Some(author));
        }

        author.merge(data.clone());

        sqlx::query("UPDATE authors SET name = ?, age = ?, description = ? WHERE id = ?")
            .bind(author.name.as_deref())
            .bind(author.age)
            .bind(author.description.as_deref())
            .bind(author.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!("Author updated");
        Ok(Some(author))
    }
}

impl Delete<i32> for AuthorRepository {
    #[instrument(skip(self), fields(author_id = %id))]
    async fn delete(&self, id: &i32) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM authors WHERE id = ?")
            .bind(*id)
            .execute(&self.connection_pool)
            .await?;

        debug!("Deleted {} author rows", result.rows_affected());
        Ok(())
    }
}
