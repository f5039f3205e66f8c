use clap::{Parser, Subcommand};

use self::{csv::CsvArg, summary::SummaryArg};

mod csv;
mod summary;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Compute the derived tournament statistics and write them as JSON
    Summary(#[clap(flatten)] SummaryArg),
    /// Write the normalized-score table (one row per repetition)
    Csv(#[clap(flatten)] CsvArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Csv(arg) => csv::run(&arg)?,
    }
    Ok(())
}
