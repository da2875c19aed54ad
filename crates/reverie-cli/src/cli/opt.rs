use clap::{Parser, Subcommand};
use reverie_utils::args::llm::LlmServices;
use reverie_utils::args::store::Store;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "reverie", about = "A journal that listens")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Run(Run),
}

#[derive(Debug, Parser)]
pub(crate) struct Run {
    #[arg(short, long)]
    pub(crate) debug: bool,

    #[arg(long, env = "REVERIE_SESSION_FILE", help = "Keep the session in this file between runs")]
    pub(crate) session_file: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) store: Store,

    #[command(flatten)]
    pub(crate) llm_services: LlmServices,
}
