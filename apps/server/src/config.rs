//! Server configuration from environment variables.

use std::path::PathBuf;

use crate::error::{ApiError, Result};

/// Runtime configuration.
///
/// Env vars (all optional):
/// - VOCAB_DB_PATH: SQLite file holding the vocabulary blob
/// - HOST: bind address (default 127.0.0.1)
/// - PORT: bind port (default 3000)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = lookup("VOCAB_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_db_path);

        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ApiError::Config(format!("invalid PORT: {}", raw)))?,
            None => 3000,
        };

        Ok(Self {
            db_path,
            host,
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_db_path() -> PathBuf {
    // Use app data directory for production, fallback to current dir
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vocab-drill")
        .join("vocabulary.db")
}
