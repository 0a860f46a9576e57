//! filesnap: Snapshot a project's files into a SQLite database

use clap::Parser;
use filesnap_cli::commands;
use filesnap_cli::logging::setup_logging;
use filesnap_cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    commands::index::run(&cli.root, &cli.db)?;

    Ok(())
}
