//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Questo modulo organizza i repository in sotto-moduli separati per una migliore manutenibilità.
//! Ogni repository gestisce le operazioni di database per una specifica entità.

// ************************* NOTA SULLE QUERY ************************* //

/*
   Le query usano la forma runtime di sqlx (query / query_as / query_scalar con .bind()),
   le righe vengono parsate tramite #[derive(sqlx::FromRow)] sulle entità.
   Riepilogo dei metodi per il numero di righe attese:
   Number of Rows	Method to Call	        Returns
   None	            .execute(...).await	        sqlx::Result<SqliteQueryResult>
   Zero or One	    .fetch_optional(...).await	sqlx::Result<Option<T>>
   Exactly One	    .fetch_one(...).await	    sqlx::Result<T>
   Multiple	        .fetch_all(...).await	    sqlx::Result<Vec<T>>
   Gli id generati vengono letti con RETURNING, gli upsert usano ON CONFLICT ... DO UPDATE.
   Le operazioni che toccano più righe (cascade dell'autore dentro il libro,
   lettura + scrittura nel merge parziale) girano in una transazione: pool.begin() ... tx.commit().
*/

// ************************* MODULI REPOSITORY ************************* //

// Dichiarazione dei sotto-moduli
pub mod author;
pub mod book;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Exists, Read, ReadAll, Save, Update};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use author::AuthorRepository;
pub use book::BookRepository;
