use axum::http::HeaderValue;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

pub const ADDR_ENV: &str = "ROOM_REGISTRY_ADDR";
pub const CORS_ORIGINS_ENV: &str = "ROOM_REGISTRY_CORS_ORIGINS";

const DEFAULT_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8000);
const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:8080",
    "http://127.0.0.1:8080",
    "http://127.0.0.1:5500",
];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid ROOM_REGISTRY_ADDR '{0}': expected host:port")]
    InvalidAddr(String),

    #[error("invalid CORS origin '{0}'")]
    InvalidOrigin(String),
}

/// Server settings resolved once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub cors_origins: Vec<HeaderValue>,
}

impl ServerConfig {
    /// Reads settings from the process environment, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var(ADDR_ENV).ok().as_deref(),
            std::env::var(CORS_ORIGINS_ENV).ok().as_deref(),
        )
    }

    pub fn from_values(addr: Option<&str>, cors_origins: Option<&str>) -> Result<Self, ConfigError> {
        let addr = match addr {
            Some(addr_str) => addr_str
                .trim()
                .parse::<SocketAddr>()
                .map_err(|_| ConfigError::InvalidAddr(addr_str.to_string()))?,
            None => DEFAULT_ADDR,
        };

        let origins: Vec<&str> = match cors_origins {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .collect(),
            None => DEFAULT_CORS_ORIGINS.to_vec(),
        };

        let cors_origins = origins
            .into_iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { addr, cors_origins })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR,
            cors_origins: DEFAULT_CORS_ORIGINS
                .iter()
                .copied()
                .map(HeaderValue::from_static)
                .collect(),
        }
    }
}
