use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_min_idle: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        // Load .env from crate root (falls back to current dir if missing)
        let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
        let _ = dotenvy::from_filename(manifest_dir.join(".env")).or_else(|_| dotenvy::dotenv());

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid u16")?;
        let log_level =
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=info".to_string());

        let database_url = match std::env::var("DATABASE_URL") {
            Ok(val) => val,
            Err(_) if cfg!(debug_assertions) => "sqlite://taskboard.db?mode=rwc".to_string(),
            Err(err) => {
                Err(anyhow::anyhow!(err)).context("DATABASE_URL is required in release builds")?
            }
        };

        let db_max_connections = std::env::var("DB_MAX_CONNS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let db_min_idle = std::env::var("DB_MIN_IDLE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2);

        Ok(Self {
            host,
            port,
            log_level,
            database_url,
            db_max_connections,
            db_min_idle,
        })
    }
}
