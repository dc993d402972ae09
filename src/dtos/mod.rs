//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod author;
pub mod book;

// Re-exports per facilitare l'import
pub use author::AuthorDTO;
pub use book::BookDTO;
