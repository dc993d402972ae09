use axum_test::TestServer;
use bookstore::core::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Crea un AppState per i test
///
/// # Arguments
/// * `pool` - Connection pool SQLite preparato da `#[sqlx::test]`
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    Arc::new(AppState::new(pool))
}

/// Crea un TestServer per i test
///
/// # Arguments
/// * `state` - AppState da utilizzare per il server
///
/// # Returns
/// TestServer configurato e pronto per eseguire richieste
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = bookstore::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}
