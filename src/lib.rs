//! Bookstore library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, Config, config, db};
pub use services::root;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/authors", configure_author_routes())
        .nest("/books", configure_book_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Configura le routes per la gestione degli autori
fn configure_author_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route("/", get(list_authors).post(create_author))
        .route(
            "/{author_id}",
            get(get_author)
                .put(full_update_author)
                .patch(partial_update_author)
                .delete(delete_author),
        )
}

/// Configura le routes per la gestione dei libri
fn configure_book_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new().route("/", get(list_books)).route(
        "/{isbn}",
        get(get_book)
            .put(save_book)
            .patch(partial_update_book)
            .delete(delete_book),
    )
}
