pub mod error;

use crate::config::error::ConfigError;
use crate::llm_config::LlmConfig;
use reverie_utils::args::llm::LlmServices as LlmServiceArgs;
use reverie_utils::args::store::{EntryBackend, Store as StoreArgs};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Location and public key of the hosted auth and data service.
#[derive(Clone)]
pub struct StoreConfig {
    pub url: Url,
    pub key: String,
    pub timeout: Duration,
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url.as_str())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: Url,
    pub min_connections: Option<u32>,
    pub max_connections: Option<u32>,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("scheme", &self.url.scheme())
            .field("min_connections", &self.min_connections)
            .field("max_connections", &self.max_connections)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub enum EntryBackendConfig {
    Hosted,
    Database(DatabaseConfig),
    Memory,
}

impl EntryBackendConfig {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            EntryBackendConfig::Hosted => "hosted",
            EntryBackendConfig::Database(_) => "database",
            EntryBackendConfig::Memory => "memory",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreConfig,
    pub entries: EntryBackendConfig,
    pub llm: LlmConfig,
}

impl Config {
    /// Validates the command line arguments. Store url and key are required, the language model key is not.
    pub fn from_args(store: StoreArgs, llm: LlmServiceArgs) -> Result<Self, ConfigError> {
        let url = store.store_url.ok_or(ConfigError::MissingStoreUrl)?;
        let key = store
            .store_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingStoreKey)?;

        let entries = match store.entry_backend {
            EntryBackend::Hosted => EntryBackendConfig::Hosted,
            EntryBackend::Memory => EntryBackendConfig::Memory,
            EntryBackend::Database => EntryBackendConfig::Database(DatabaseConfig {
                url: store.database_url.ok_or(ConfigError::MissingDatabaseUrl)?,
                min_connections: store.db_min_connections,
                max_connections: store.db_max_connections,
            }),
        };

        let llm = LlmConfig::try_from(llm)?;

        Ok(Self {
            store: StoreConfig {
                url,
                key,
                timeout: Duration::from_secs(store.store_timeout),
            },
            entries,
            llm,
        })
    }
}
