//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Questo modulo organizza i service handlers in sotto-moduli separati per una migliore manutenibilità.
//! Ogni modulo gestisce gli endpoint HTTP per una specifica risorsa.

pub mod author;
pub mod book;

// Re-exports per facilitare l'import
pub use author::{
    create_author, delete_author, full_update_author, get_author, list_authors,
    partial_update_author,
};
pub use book::{delete_book, get_book, list_books, partial_update_book, save_book};

use axum::{http::StatusCode, response::IntoResponse};

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
