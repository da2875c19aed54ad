use clap::{Args, ValueEnum};
use url::Url;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum EntryBackend {
    /// Entries live in the hosted data service, next to the accounts.
    #[default]
    Hosted,
    /// Entries live in a postgres or sqlite database reached through `--database-url`.
    Database,
    /// Entries are kept in memory and lost on exit.
    Memory,
}

#[derive(Debug, Clone, Args)]
pub struct Store {
    #[arg(long, env = "REVERIE_STORE_URL", help = "Base url of the hosted auth and data service")]
    pub store_url: Option<Url>,

    #[arg(
        long,
        env = "REVERIE_STORE_KEY",
        hide_env_values = true,
        help = "Public api key of the hosted service"
    )]
    pub store_key: Option<String>,

    #[arg(long, value_enum, env = "REVERIE_ENTRY_BACKEND", default_value_t = EntryBackend::Hosted)]
    pub entry_backend: EntryBackend,

    #[arg(
        long,
        env = "REVERIE_DATABASE_URL",
        hide_env_values = true,
        help = "Database used by the database entry backend"
    )]
    pub database_url: Option<Url>,

    #[arg(long, help = "Min connections")]
    pub db_min_connections: Option<u32>,

    #[arg(long, help = "Max connections")]
    pub db_max_connections: Option<u32>,

    #[arg(long, default_value_t = 30, help = "Timeout for requests to the hosted service in seconds")]
    pub store_timeout: u64,
}
