use axum::http::HeaderValue;

use crate::errors::AppError;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct Config {
    /// `None` selects the in-memory store.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<HeaderValue>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| {
                AppError::Config(format!("Invalid DATABASE_MAX_CONNECTIONS '{raw}': {e}"))
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("Invalid PORT '{raw}': {e}")))?,
            None => DEFAULT_PORT,
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .map_err(|e| AppError::Config(format!("Invalid origin '{origin}': {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            database_url,
            database_max_connections,
            host,
            port,
            allowed_origins,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert!(config.database_url.is_none());
        assert_eq!(config.port, 3001);
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.bind_address(), "0.0.0.0:3001");
        assert_eq!(config.allowed_origins, vec!["http://localhost:3000"]);
    }

    #[test]
    fn test_reads_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/feedback"),
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("ALLOWED_ORIGINS", "http://a.test, http://b.test"),
        ])
        .unwrap();

        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/feedback")
        );
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.allowed_origins.len(), 2);
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(matches!(
            config_from(&[("PORT", "eighty")]),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_blank_database_url_means_memory() {
        let config = config_from(&[("DATABASE_URL", "  ")]).unwrap();
        assert!(config.database_url.is_none());
    }
}
