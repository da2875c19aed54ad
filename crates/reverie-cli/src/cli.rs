pub(crate) mod opt;
mod run;

use crate::cli::opt::Commands;
use anyhow::Error;
use run::run;

pub(crate) async fn exec(command: Commands) -> Result<(), Error> {
    match command {
        Commands::Run(o) => run(o).await,
    }
}
