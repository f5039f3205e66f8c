use std::path::PathBuf;

use dilemma_results::{MoralitySummary, PayoffSummary, ResultSet};
use serde::Serialize;

use crate::{data::OutcomeDocument, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SummaryArg {
    /// Tournament outcome document (JSON)
    #[arg(long)]
    input: PathBuf,
    /// Output file path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Skip cooperation-derived (morality) metrics
    #[arg(long)]
    skip_morality: bool,
}

/// JSON shape of the `summary` subcommand's output.
#[derive(Debug, Serialize)]
struct SummaryDocument<'a> {
    players: &'a [String],
    turns: usize,
    repetitions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    payoff: Option<&'a PayoffSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    morality: Option<&'a MoralitySummary>,
}

impl<'a> SummaryDocument<'a> {
    fn new(results: &'a ResultSet) -> Self {
        Self {
            players: results.players(),
            turns: results.turns(),
            repetitions: results.repetitions(),
            payoff: results.payoff(),
            morality: results.morality(),
        }
    }
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let document = OutcomeDocument::load(&arg.input)?;
    let results = document.into_result_set(!arg.skip_morality)?;

    let mut output = Output::from_output_path(arg.output.clone())?;
    output.write_json(&SummaryDocument::new(&results))?;
    Ok(())
}
