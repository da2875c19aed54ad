use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("The url of the hosted service is missing (--store-url or REVERIE_STORE_URL)")]
    MissingStoreUrl,

    #[error("The api key of the hosted service is missing (--store-key or REVERIE_STORE_KEY)")]
    MissingStoreKey,

    #[error("The database entry backend needs --database-url or REVERIE_DATABASE_URL")]
    MissingDatabaseUrl,

    #[error("Unknown language model service: {0}")]
    UnknownLlmService(String),
}
