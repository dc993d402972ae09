//! Book services - Gestione libri

use crate::core::{AppError, AppState};
use crate::dtos::BookDTO;
use crate::repositories::{Delete, Exists, Read, ReadAll, Save, Update};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_macros::debug_handler;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

#[debug_handler]
#[instrument(skip(state, body), fields(isbn = %isbn))]
pub async fn save_book(
    State(state): State<Arc<AppState>>,
    Path(isbn): Path<String>, // parametro dalla URL /books/{isbn}
    Json(body): Json<BookDTO>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Saving book");
    // 1. Controllare se il libro esiste già (serve solo per lo status code)
    // 2. Salvare il libro con l'isbn del path, l'autore annidato viene salvato in cascata
    // 3. 201 se il libro è nuovo, 200 se è stato sostituito
    let existed = state.book.exists(&isbn).await?;
    let book = state.book.save(&isbn, &body).await?;

    let status = if existed {
        info!("Book replaced");
        StatusCode::OK
    } else {
        info!("Book created");
        StatusCode::CREATED
    };

    Ok((status, Json(BookDTO::from(book))))
}

#[instrument(skip(state))]
pub async fn list_books(State(state): State<Arc<AppState>>) -> Result<Json<Vec<BookDTO>>, AppError> {
    debug!("Listing books");
    let books = state.book.read_all().await?;

    info!("Retrieved {} books", books.len());
    let books_dto = books.into_iter().map(BookDTO::from).collect::<Vec<_>>();
    Ok(Json(books_dto))
}

#[instrument(skip(state), fields(isbn = %isbn))]
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(isbn): Path<String>,
) -> Result<Json<BookDTO>, AppError> {
    debug!("Fetching book by isbn");
    let book = state.book.read(&isbn).await?.ok_or_else(|| {
        warn!("Book not found");
        AppError::not_found()
    })?;

    Ok(Json(BookDTO::from(book)))
}

#[debug_handler]
#[instrument(skip(state, body), fields(isbn = %isbn))]
pub async fn partial_update_book(
    State(state): State<Arc<AppState>>,
    Path(isbn): Path<String>,
    Json(body): Json<BookDTO>,
) -> Result<Json<BookDTO>, AppError> {
    debug!("Partially updating book");
    // 1. Verificare che il libro esista, altrimenti 404
    // 2. Fondere titolo e autore (l'autore viene sostituito per intero, non fuso)
    // 3. Se il libro sparisce tra il controllo e la lettura (delete concorrente) -> 500
    if !state.book.exists(&isbn).await? {
        warn!("Book not found, cannot update");
        return Err(AppError::not_found());
    }

    let book = state.book.update(&isbn, &body).await?.ok_or_else(|| {
        error!("Book disappeared between existence check and update");
        AppError::internal_server_error("Book does not exist")
    })?;

    info!("Book updated");
    Ok(Json(BookDTO::from(book)))
}

#[instrument(skip(state), fields(isbn = %isbn))]
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(isbn): Path<String>,
) -> Result<StatusCode, AppError> {
    // Delete idempotente: 204 anche se il libro non esisteva
    state.book.delete(&isbn).await?;

    info!("Book deleted");
    Ok(StatusCode::NO_CONTENT)
}
