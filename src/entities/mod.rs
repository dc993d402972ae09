//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità (models) che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella nel database.

pub mod author;
pub mod book;
pub mod merge;

// Re-exports per facilitare l'import
pub use author::{Author, AuthorPatch};
pub use book::{Book, BookPatch, BookRow};
pub use merge::Merge;
