use crate::analyzer::error::AnalyzeError;
use crate::analyzer::{TextAnalyzer, create_analyzer};
use crate::auth::{AuthProvider, HostedAuth};
use crate::capture::CaptureWorkflow;
use crate::config::{Config, EntryBackendConfig};
use crate::store::{DatabaseEntryStore, EntryStore, HostedEntryStore, MemoryEntryStore};
use crate::timeline::TimelineQuery;
use reverie_http::ServiceClient;
use reverie_model::status::Status;
use sea_orm::DbErr;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServicesError {
    #[error(transparent)]
    Http(#[from] reverie_http::Error),

    #[error(transparent)]
    Db(#[from] DbErr),

    #[error(transparent)]
    Analyzer(#[from] AnalyzeError),
}

/// The external collaborators, built once at startup and shared by every request.
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<dyn AuthProvider>,
    pub store: Arc<dyn EntryStore>,
    pub analyzer: Arc<dyn TextAnalyzer>,
}

impl Services {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthProvider>, store: Arc<dyn EntryStore>, analyzer: Arc<dyn TextAnalyzer>) -> Self {
        Self { auth, store, analyzer }
    }

    pub async fn from_config(config: &Config) -> Result<Self, ServicesError> {
        let client = ServiceClient::with_timeout(config.store.url.clone(), config.store.key.clone(), config.store.timeout)?;

        let store: Arc<dyn EntryStore> = match &config.entries {
            EntryBackendConfig::Hosted => Arc::new(HostedEntryStore::new(client.clone())),
            EntryBackendConfig::Database(database) => Arc::new(DatabaseEntryStore::connect(database).await?),
            EntryBackendConfig::Memory => {
                tracing::warn!("journal entries are kept in memory and lost on exit");
                Arc::new(MemoryEntryStore::new())
            }
        };
        tracing::info!(backend = store.backend(), "entry store ready");

        Ok(Self {
            auth: Arc::new(HostedAuth::new(client)),
            store,
            analyzer: create_analyzer(&config.llm)?,
        })
    }

    #[must_use]
    pub fn capture(&self) -> CaptureWorkflow {
        CaptureWorkflow::new(Arc::clone(&self.analyzer), Arc::clone(&self.store))
    }

    #[must_use]
    pub fn timeline(&self) -> TimelineQuery {
        TimelineQuery::new(Arc::clone(&self.store))
    }

    #[must_use]
    pub fn status(&self) -> Status {
        Status {
            analysis: self.analyzer.mode(),
            entry_backend: self.store.backend().to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}
