//! Server configuration from environment variables (a `.env` file is honoured by the binary).

use crate::error::ConfigError;
use crate::routes::DEFAULT_BODY_LIMIT;
use std::env;
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `DATABASE_URL`, falling back to `DB_URI`.
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Insert demo restaurants and pizzas into an empty database on start.
    pub seed_demo_data: bool,
    pub body_limit: usize,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = get("DATABASE_URL")
            .or_else(|| get("DB_URI"))
            .unwrap_or_else(|| "postgres://localhost/pizzas".into());

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| "127.0.0.1:5555".into())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("BIND_ADDR"))?;

        let max_connections = get("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|| "5".into())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("DB_MAX_CONNECTIONS"))?;

        let seed_demo_data = match get("SEED_DEMO_DATA").as_deref().map(str::trim) {
            None | Some("") => false,
            Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => true,
            Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => false,
            Some(_) => return Err(ConfigError::InvalidValue("SEED_DEMO_DATA")),
        };

        let body_limit = match get("BODY_LIMIT_BYTES") {
            Some(v) => v.parse().map_err(|_| ConfigError::InvalidValue("BODY_LIMIT_BYTES"))?,
            None => DEFAULT_BODY_LIMIT,
        };

        Ok(ServerConfig {
            database_url,
            bind_addr,
            max_connections,
            seed_demo_data,
            body_limit,
        })
    }
}
