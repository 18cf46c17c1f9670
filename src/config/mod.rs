use crate::error::{MoviesError, Result};
use dashmap::DashMap;
use std::env;
use std::sync::Arc;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "movies=info,tower_http=info";

/// Key/value configuration source.
///
/// `ConfigService::new` snapshots the process environment, after loading a
/// `.env` file if one is present.
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    pub fn new() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env file");
        }
        let service = Self::default();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    /// A source that holds only what is `set` on it.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }
}

/// Settings the HTTP server starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl ServerConfig {
    /// | Key        | Default                        |
    /// |------------|--------------------------------|
    /// | `HOST`     | `0.0.0.0`                      |
    /// | `PORT`     | `3000`                         |
    /// | `RUST_LOG` | `movies=info,tower_http=info`  |
    pub fn from_config(config: &ConfigService) -> Result<Self> {
        let port = match config.get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| MoviesError::Config {
                key: "PORT".to_string(),
                message: format!("{raw:?} is not a valid port: {e}"),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: config.get_or("HOST", DEFAULT_HOST),
            port,
            log_filter: config.get_or("RUST_LOG", DEFAULT_LOG_FILTER),
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::from_config(&ConfigService::new())
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
