//! IMDB CLI - Command line tool for inspecting the IMDB movie dataset.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "imdb-cli",
    version,
    about = "IMDB movie dataset toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: imdb_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("imdb-cli starting");
    imdb_cmd::run(cli.command)
}
