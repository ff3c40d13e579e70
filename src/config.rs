// src/config.rs

use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use axum::http::HeaderValue;
use dotenvy::dotenv;

/// Runtime configuration, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: IpAddr,
    pub port: u16,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,
    pub rust_log: String,
    pub log_dir: String,
}

/// A configuration value that could not be parsed.
#[derive(Debug)]
pub struct ConfigError {
    pub key: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid value for {}: {}", self.key, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://mcq.db".to_string(),
            database_max_connections: 5,
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3001,
            cors_origins: Vec::new(),
            rust_log: "info".to_string(),
            log_dir: "logs".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let defaults = Self::default();

        let cors_origins = match env::var("CORS_ORIGINS") {
            Ok(raw) => parse_cors_origins(&raw)?,
            Err(_) => defaults.cors_origins,
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            database_max_connections: get_env_parse(
                "DATABASE_MAX_CONNECTIONS",
                defaults.database_max_connections,
            )?,
            host: get_env_parse("HOST", defaults.host)?,
            port: get_env_parse("PORT", defaults.port)?,
            cors_origins,
            rust_log: env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            log_dir: env::var("LOG_DIR").unwrap_or(defaults.log_dir),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Splits a comma-separated origin list. Every entry must be a valid header value;
/// a blank list means any origin.
pub fn parse_cors_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| match HeaderValue::from_str(origin) {
            Ok(_) => Ok(origin.to_string()),
            Err(e) => Err(ConfigError {
                key: "CORS_ORIGINS",
                message: format!("{:?} ({})", origin, e),
            }),
        })
        .collect()
}

fn get_env_parse<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError {
            key,
            message: format!("{:?} ({})", raw, e),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces_on_3001() {
        let config = Config::default();
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:3001");
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.database_url, "sqlite://mcq.db");
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let origins =
            parse_cors_origins(" http://localhost:5500 , http://127.0.0.1:5500,").unwrap();
        assert_eq!(origins, vec!["http://localhost:5500", "http://127.0.0.1:5500"]);
        assert!(parse_cors_origins("  ").unwrap().is_empty());
    }

    #[test]
    fn invalid_cors_origin_is_a_config_error() {
        let err = parse_cors_origins("http://localhost:5500,http://bad\u{7f}origin").unwrap_err();
        assert_eq!(err.key, "CORS_ORIGINS");
    }

    #[test]
    fn config_error_names_the_key() {
        let err = ConfigError {
            key: "PORT",
            message: "\"abc\" (invalid digit found in string)".to_string(),
        };
        assert!(err.to_string().starts_with("Invalid value for PORT"));
    }
}
