mod cli;
mod logging;

use clap::Parser;
use cli::args::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init();
    let cli = Cli::parse();
    cli::run(cli)
}
