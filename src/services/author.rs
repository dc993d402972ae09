//! Author services - Gestione autori

use crate::core::{AppError, AppState};
use crate::dtos::AuthorDTO;
use crate::entities::AuthorPatch;
use crate::repositories::{Create, Delete, Exists, Read, ReadAll, Save, Update};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_macros::debug_handler;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

#[instrument(skip(state, body))]
pub async fn create_author(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AuthorDTO>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Creating new author");
    // 1. Salvare l'autore (l'eventuale id viene ignorato, lo assegna il database)
    // 2. Ritornare 201 con l'autore salvato
    let author = state.author.create(&body).await?;

    info!("Author created with id {}", author.id);
    Ok((StatusCode::CREATED, Json(AuthorDTO::from(author))))
}

#[instrument(skip(state))]
pub async fn list_authors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AuthorDTO>>, AppError> {
    debug!("Listing authors");
    let authors = state.author.read_all().await?;

    info!("Retrieved {} authors", authors.len());
    let authors_dto = authors.into_iter().map(AuthorDTO::from).collect::<Vec<_>>();
    Ok(Json(authors_dto))
}

#[instrument(skip(state), fields(author_id = %author_id))]
pub async fn get_author(
    State(state): State<Arc<AppState>>,
    Path(author_id): Path<i32>, // parametro dalla URL /authors/{author_id}
) -> Result<Json<AuthorDTO>, AppError> {
    debug!("Fetching author by ID");
    let author = state.author.read(&author_id).await?.ok_or_else(|| {
        warn!("Author not found");
        AppError::not_found()
    })?;

    Ok(Json(AuthorDTO::from(author)))
}

#[debug_handler]
#[instrument(skip(state, body), fields(author_id = %author_id))]
pub async fn full_update_author(
    State(state): State<Arc<AppState>>,
    Path(author_id): Path<i32>,
    Json(body): Json<AuthorDTO>,
) -> Result<Json<AuthorDTO>, AppError> {
    debug!("Replacing author");
    // 1. Verificare che l'autore esista, altrimenti 404
    // 2. L'id del path vince su quello del body
    // 3. Sovrascrivere tutti i campi (anche quelli assenti diventano null)
    if !state.author.exists(&author_id).await? {
        warn!("Author not found, cannot replace");
        return Err(AppError::not_found());
    }

    let author = state.author.save(&author_id, &body).await?;

    info!("Author replaced");
    Ok(Json(AuthorDTO::from(author)))
}

#[debug_handler]
#[instrument(skip(state, body), fields(author_id = %author_id))]
pub async fn partial_update_author(
    State(state): State<Arc<AppState>>,
    Path(author_id): Path<i32>,
    Json(body): Json<AuthorDTO>,
) -> Result<Json<AuthorDTO>, AppError> {
    debug!("Partially updating author");
    // 1. Verificare che l'autore esista, altrimenti 404
    // 2. Fondere solo i campi presenti nel body con quelli salvati
    // 3. Se l'autore sparisce tra il controllo e la lettura (delete concorrente) -> 500
    if !state.author.exists(&author_id).await? {
        warn!("Author not found, cannot update");
        return Err(AppError::not_found());
    }

    let author = state
        .author
        .update(&author_id, &AuthorPatch::from(body))
        .await?
        .ok_or_else(|| {
            error!("Author disappeared between existence check and update");
            AppError::internal_server_error("Author does not exist")
        })?;

    info!("Author updated");
    Ok(Json(AuthorDTO::from(author)))
}

#[instrument(skip(state), fields(author_id = %author_id))]
pub async fn delete_author(
    State(state): State<Arc<AppState>>,
    Path(author_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    // Delete idempotente: 204 anche se l'autore non esisteva
    state.author.delete(&author_id).await?;

    info!("Author deleted");
    Ok(StatusCode::NO_CONTENT)
}
