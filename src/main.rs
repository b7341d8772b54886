//! CLI entry point for minimal decycling set component exploration

use clap::Parser;
use mds_components::io::cli::Cli;
use mds_components::io::logging::init_logging;
use tracing::error;

fn main() -> mds_components::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    cli.run().inspect_err(|err| error!("{err}"))
}
