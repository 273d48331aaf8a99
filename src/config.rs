//! Server configuration from environment variables.

use crate::error::ConfigError;
use std::str::FromStr;

/// Settings for the HTTP server and its database pool.
///
/// | Env Var              | Default                          |
/// |----------------------|----------------------------------|
/// | `DATABASE_URL`       | `postgres://localhost/products`  |
/// | `HOST`               | `0.0.0.0`                        |
/// | `PORT`               | `3000`                           |
/// | `DB_MAX_CONNECTIONS` | `5`                              |
/// | `BODY_LIMIT_BYTES`   | `1048576`                        |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    /// Requests with a larger body are refused with 413.
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: "postgres://localhost/products".into(),
            host: "0.0.0.0".into(),
            port: 3000,
            db_max_connections: 5,
            body_limit_bytes: 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// Read the process environment. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            db_max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", defaults.db_max_connections)?,
            body_limit_bytes: parse_var(&lookup, "BODY_LIMIT_BYTES", defaults.body_limit_bytes)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
