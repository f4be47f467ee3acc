//! Process configuration read from environment variables.

use std::net::{AddrParseError, SocketAddr};

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Which document store backs the collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Documents live in process memory and vanish on restart.
    InMemory,
    Postgres { database_url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub store: StoreBackend,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_ADDR {value:?} is not a socket address: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("DATABASE_URL must be set when USE_PERSISTENT_STORES=true")]
    MissingDatabaseUrl,
}

impl ApiConfig {
    /// Read `BIND_ADDR`, `USE_PERSISTENT_STORES` and `DATABASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = raw_addr
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let use_persistent = lookup("USE_PERSISTENT_STORES")
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        let store = if use_persistent {
            let database_url = lookup("DATABASE_URL").ok_or(ConfigError::MissingDatabaseUrl)?;
            StoreBackend::Postgres { database_url }
        } else {
            tracing::warn!("USE_PERSISTENT_STORES not enabled; documents are kept in memory only");
            StoreBackend::InMemory
        };

        Ok(Self { bind_addr, store })
    }
}
