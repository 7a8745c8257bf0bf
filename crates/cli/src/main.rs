use clap::Parser;

use recordkeep_cli::args::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    recordkeep_observability::init(cli.log_format.into());

    let now = chrono::Local::now().naive_local();
    tracing::info!(command = ?cli.command, "recordkeep starting");

    recordkeep_cli::run(&cli, now.date(), now)
}
