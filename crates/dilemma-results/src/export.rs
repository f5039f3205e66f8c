//! Textual export of normalized scores.
//!
//! One format is supported: a comma-separated table with the ranked player
//! names as the header and one row per repetition, each cell holding the
//! ranked player's normalized score for that repetition with default numeric
//! formatting.

use crate::payoff::PayoffSummary;

/// Export requested without the data it depends on.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ExportError {
    #[display("normalized scores are unavailable: the outcome bundle carried no payoff channel")]
    PayoffUnavailable,
}

/// Renders the normalized-score table for a computed payoff summary.
pub(crate) fn csv(summary: &PayoffSummary, repetitions: usize) -> String {
    let mut out = String::new();
    out.push_str(&summary.ranked_names.join(","));
    out.push('\n');
    for repetition in 0..repetitions {
        let row = summary
            .ranking
            .iter()
            .map(|&rank| summary.normalized_scores[rank][repetition].to_string())
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&row);
        out.push('\n');
    }
    out
}
