//! Application State - Stato globale dell'applicazione
//!
//! Contiene i repository condivisi tra tutte le route.

use crate::repositories::{AuthorRepository, BookRepository};
use sqlx::SqlitePool;

/// Stato globale dell'applicazione condiviso tra tutte le route
pub struct AppState {
    /// Repository per la gestione degli autori
    pub author: AuthorRepository,

    /// Repository per la gestione dei libri
    pub book: BookRepository,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i repository
    /// con il pool di connessioni fornito.
    ///
    /// # Arguments
    /// * `pool` - Pool di connessioni SQLite condiviso
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            author: AuthorRepository::new(pool.clone()),
            book: BookRepository::new(pool),
        }
    }
}
