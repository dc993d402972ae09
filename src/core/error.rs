use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use tracing::error;

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: Option<&'static str>,
}

impl AppError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message: Some(message),
        }
    }

    /// Errore con solo lo status code: la risposta ha il body vuoto
    pub fn from_status(status: StatusCode) -> Self {
        Self {
            status,
            message: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    // Common error constructors
    pub fn not_found() -> Self {
        Self::from_status(StatusCode::NOT_FOUND)
    }

    pub fn internal_server_error(message: &'static str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn service_unavailable(message: &'static str) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::not_found(),

            // Vincoli violati o schema rotto: guasto lato server, il messaggio
            // del database resta nei log e non arriva al client
            sqlx::Error::Database(db_err) => {
                error!("Database error: {}", db_err);
                Self::internal_server_error("Internal server error")
            }

            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                Self::service_unavailable("Database unavailable")
            }

            other => {
                error!("Unhandled storage error: {}", other);
                Self::internal_server_error("Internal server error")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self.message {
            Some(message) => {
                let body = Json(ErrorResponse { error: message });
                (self.status, body).into_response()
            }
            None => self.status.into_response(),
        }
    }
}
