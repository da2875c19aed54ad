use clap::{Parser, Subcommand};
use reverie_utils::args::llm::LlmServices;
use reverie_utils::args::store::Store;
use std::net::IpAddr;

#[derive(Debug, Parser)]
#[command(name = "reverie-server", about = "Serve the journal api")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Run(Run),
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(long)]
    pub(crate) host: Option<IpAddr>,

    #[arg(short, long)]
    pub(crate) port: Option<u16>,

    #[arg(long, value_delimiter = ',', env = "REVERIE_ORIGINS", help = "Origins allowed by CORS")]
    pub(crate) origins: Vec<String>,

    #[command(flatten)]
    pub(crate) store: Store,

    #[command(flatten)]
    pub(crate) llm_services: LlmServices,

    #[arg(long, env = "REVERIE_OTLP_ENDPOINT", help = "Export traces to this OTLP endpoint")]
    pub(crate) otlp_endpoint: Option<String>,

    #[arg(long, default_value = "dev", help = "Set the environment reported with traces")]
    pub(crate) env: String,
}
