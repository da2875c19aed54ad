use crate::opt::{Commands, Run};
use anyhow::Result;
use axum::serve;
use clap::Parser;
use reverie_core::config::Config;
use reverie_core::services::Services;
use reverie_utils::net::create_listener;
use std::env;
use std::net::{IpAddr, Ipv4Addr};

mod app;
mod opt;
mod routes;
mod user;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 3030;

async fn run(opt: Run) -> Result<()> {
    let _guard = reverie_utils::tracing::setup(
        reverie_utils::tracing::TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .otlp_endpoint(opt.otlp_endpoint)
            .env(opt.env)
            .build(),
    )?;

    let config = Config::from_args(opt.store, opt.llm_services).inspect_err(|error| {
        tracing::error!(error = error as &dyn std::error::Error, "invalid configuration");
    })?;
    let services = Services::from_config(&config).await?;

    let app = app::create_app(services, &opt.origins)?;
    let listener = create_listener((opt.host, opt.port), (DEFAULT_HOST, DEFAULT_PORT)).await?;
    let service = app.into_make_service();
    tracing::info!(local_addr = %listener.local_addr()?, "starting app");
    serve::serve(listener, service).await?;
    Ok(())
}

fn main() -> Result<()> {
    unsafe { env::set_var("RUST_BACKTRACE", "1") };

    let main = async {
        let opt = opt::Cli::parse();

        match opt.command {
            Commands::Run(o) => run(o).await?,
        }
        Ok(())
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(main)
}
