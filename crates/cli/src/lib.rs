//! Command dispatch for the `recordkeep` binary.

pub mod args;
pub mod demos;
pub mod report;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::info;

use recordkeep_infra::FlatFileStore;

use crate::args::{Cli, DemoCommand, InventoryArgs, OutputFormat};
use crate::report::emit;

pub fn run(cli: &Cli, today: NaiveDate, now: NaiveDateTime) -> anyhow::Result<()> {
    match &cli.command {
        DemoCommand::Warehouse => emit(&demos::warehouse::run(today)?, cli.output),
        DemoCommand::Finance => emit(&demos::finance::run(today)?, cli.output),
        DemoCommand::School => emit(&demos::school::run()?, cli.output),
        DemoCommand::Healthcare => emit(&demos::healthcare::run(today)?, cli.output),
        DemoCommand::Inventory(args) => run_inventory(args, now, cli.output),
        DemoCommand::All(args) => {
            emit(&demos::warehouse::run(today)?, cli.output)?;
            emit(&demos::finance::run(today)?, cli.output)?;
            emit(&demos::school::run()?, cli.output)?;
            emit(&demos::healthcare::run(today)?, cli.output)?;
            run_inventory(args, now, cli.output)
        }
    }
}

fn run_inventory(args: &InventoryArgs, now: NaiveDateTime, output: OutputFormat) -> anyhow::Result<()> {
    let store = FlatFileStore::new(args.data_file.clone()).with_policy(args.policy());
    info!(path = %store.path().display(), policy = ?store.policy(), "running inventory demo");
    emit(&demos::inventory::run(&store, now)?, output)
}
