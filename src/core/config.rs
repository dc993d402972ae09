//! Configurazione - Caricamento dei parametri del server da variabili d'ambiente

use dotenv::dotenv;
use std::env;
use tracing::{info, warn};

const DEFAULT_DATABASE_URL: &str = "sqlite://bookstore.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub connection_lifetime_secs: u64,
    pub app_env: String,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();
        Self::from_source(|key| env::var(key).ok())
    }

    /// Costruisce la configurazione a partire da una sorgente di chiavi/valori qualsiasi
    pub fn from_source<F>(get: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = get("DATABASE_URL").unwrap_or_else(|| {
            warn!(
                "DATABASE_URL not set, falling back to {}",
                DEFAULT_DATABASE_URL
            );
            DEFAULT_DATABASE_URL.to_string()
        });

        let server_host = get("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let server_port = get("SERVER_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let max_connections = get("MAX_DB_CONNECTIONS")
            .unwrap_or_else(|| "5".to_string())
            .parse::<u32>()
            .map_err(|_| "Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string())?;

        if max_connections == 0 {
            return Err("Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string());
        }

        let connection_lifetime_secs = get("DB_CONNECTION_LIFETIME_SECS")
            .unwrap_or_else(|| "1800".to_string())
            .parse::<u64>()
            .map_err(|_| {
                "Invalid DB_CONNECTION_LIFETIME_SECS: must be a positive number".to_string()
            })?;

        let app_env = get("APP_ENV").unwrap_or_else(|| "development".to_string());

        Ok(Config {
            database_url,
            server_host,
            server_port,
            max_connections,
            connection_lifetime_secs,
            app_env,
        })
    }

    /// Indirizzo su cui mettere in ascolto il listener TCP
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Logga la configurazione (nascondendo le credenziali)
    pub fn log_info(&self) {
        info!(
            environment = %self.app_env,
            address = %self.bind_address(),
            database = %Self::mask_url(&self.database_url),
            max_connections = self.max_connections,
            connection_lifetime_secs = self.connection_lifetime_secs,
            "Server configuration loaded"
        );
    }

    /// Maschera le credenziali nell'URL del database per il logging
    fn mask_url(url: &str) -> String {
        if let (Some(at_pos), Some(scheme_end)) = (url.find('@'), url.find("://")) {
            if scheme_end < at_pos {
                let scheme = &url[..scheme_end + 3];
                let after_at = &url[at_pos..];
                return format!("{}***{}", scheme, after_at);
            }
        }
        url.to_string()
    }
}
