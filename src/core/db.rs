//! Database - Pool di connessioni e migrazioni embedded

use super::Config;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, instrument};

/// Migrazioni SQL incluse nel binario a compile time
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Crea il pool di connessioni a partire dalla configurazione.
/// Il file del database viene creato se non esiste.
#[instrument(skip(config), fields(max_connections = config.max_connections))]
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .max_lifetime(Duration::from_secs(config.connection_lifetime_secs))
        .connect_with(options)
        .await?;

    info!("Database connection pool ready");
    Ok(pool)
}

/// Applica tutte le migrazioni pendenti
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}
