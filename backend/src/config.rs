//! Server configuration, read from the environment.

use std::path::PathBuf;

/// Runtime settings for the API server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// SQLite file holding roadmaps and progress
    pub db_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            db_path: PathBuf::from("level_roadmap.db"),
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT` and `ROADMAP_DB_PATH`, keeping defaults for
    /// anything missing or unparsable
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("[CONFIG] Invalid PORT '{}', using {}", raw, defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            db_path: lookup("ROADMAP_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
        }
    }
}
