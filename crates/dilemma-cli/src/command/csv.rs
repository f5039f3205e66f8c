use std::path::PathBuf;

use crate::{data::OutcomeDocument, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CsvArg {
    /// Tournament outcome document (JSON)
    #[arg(long)]
    input: PathBuf,
    /// Output file path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &CsvArg) -> anyhow::Result<()> {
    let document = OutcomeDocument::load(&arg.input)?;
    // Morality metrics are never part of the CSV table; skip the eigenvector
    // work outright.
    let results = document.into_result_set(false)?;
    let table = results.csv()?;

    let mut output = Output::from_output_path(arg.output.clone())?;
    output.write_str(&table)?;
    Ok(())
}
