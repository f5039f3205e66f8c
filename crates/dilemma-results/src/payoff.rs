//! Reductions over the canonical payoff tensor.
//!
//! Everything here derives from one channel: per-pair payoff totals across
//! repetitions. The summary groups every payoff-derived field; it is built in
//! one pass at engine construction and is either wholly present (payoff
//! channel supplied) or wholly absent.
//!
//! # Conventions
//!
//! - Score sums and win counts run over every opponent index exactly as the
//!   raw data carries it, diagonal included. A player never strictly beats
//!   itself, so self-pairs cannot add wins; self-payoff does count toward the
//!   score, which is the source pipeline's aggregation.
//! - "Per-opponent" denominators use `N - 1`: normalized scores divide by
//!   `(N - 1) * T`.
//! - Per-turn values divide by `T`; `T == 0` is a caller error and propagates
//!   as non-finite numbers.

use serde::Serialize;

use crate::{numeric::StatisticsProvider, reshape::CanonicalTensor};

/// Every field derived from the payoff channel.
#[derive(Debug, Clone, Serialize)]
pub struct PayoffSummary {
    /// Per player, per repetition: payoff summed across opponents, `[N][R]`.
    pub scores: Vec<Vec<f64>>,
    /// Scores divided by `(N - 1) * T`, `[N][R]`.
    pub normalized_scores: Vec<Vec<f64>>,
    /// Player indices ordered by descending mean normalized score; ties keep
    /// insertion order (stable sort).
    pub ranking: Vec<usize>,
    /// Player names in ranking order.
    pub ranked_names: Vec<String>,
    /// Mean per-turn payoff per ordered pair across repetitions, `[N][N]`.
    pub payoff_matrix: Vec<Vec<f64>>,
    /// Population standard deviation of the per-turn payoff, `[N][N]`.
    pub payoff_stddevs: Vec<Vec<f64>>,
    /// Per player, per repetition: opponents strictly outscored, `[N][R]`.
    pub wins: Vec<Vec<usize>>,
    /// Mean per-turn payoff asymmetry per ordered pair, `[N][N]`;
    /// antisymmetric up to floating error.
    pub payoff_diffs_matrix: Vec<Vec<f64>>,
    /// Unaggregated per-turn payoff asymmetries per player, flattened
    /// opponent-major then repetition-minor, `[N][N * R]`. Kept raw for
    /// downstream significance testing.
    pub score_diffs: Vec<Vec<f64>>,
}

impl PayoffSummary {
    /// Reduces the canonical payoff tensor into the full summary.
    #[expect(clippy::cast_precision_loss)]
    pub(crate) fn from_canonical(
        payoff: &CanonicalTensor,
        players: &[String],
        turns: usize,
        repetitions: usize,
        provider: &dyn StatisticsProvider,
    ) -> Self {
        let num_players = players.len();
        let turns_f = turns as f64;
        let per_opponent_turns = ((num_players.saturating_sub(1)) * turns) as f64;

        let scores: Vec<Vec<f64>> = (0..num_players)
            .map(|i| {
                (0..repetitions)
                    .map(|r| (0..num_players).map(|j| payoff[i][j][r]).sum())
                    .collect()
            })
            .collect();

        let normalized_scores: Vec<Vec<f64>> = scores
            .iter()
            .map(|row| row.iter().map(|score| score / per_opponent_turns).collect())
            .collect();

        let mean_scores: Vec<f64> = normalized_scores
            .iter()
            .map(|row| provider.mean(row))
            .collect();
        let mut ranking: Vec<usize> = (0..num_players).collect();
        ranking.sort_by(|&a, &b| mean_scores[b].total_cmp(&mean_scores[a]));

        let ranked_names = ranking.iter().map(|&rank| players[rank].clone()).collect();

        let mut payoff_matrix = vec![vec![0.0; num_players]; num_players];
        let mut payoff_stddevs = vec![vec![0.0; num_players]; num_players];
        for i in 0..num_players {
            for j in 0..num_players {
                let per_turn: Vec<f64> = payoff[i][j].iter().map(|p| p / turns_f).collect();
                payoff_matrix[i][j] = provider.mean(&per_turn);
                payoff_stddevs[i][j] = provider.population_std_dev(&per_turn);
            }
        }

        let wins: Vec<Vec<usize>> = (0..num_players)
            .map(|i| {
                (0..repetitions)
                    .map(|r| {
                        (0..num_players)
                            .filter(|&j| payoff[i][j][r] > payoff[j][i][r])
                            .count()
                    })
                    .collect()
            })
            .collect();

        let mut payoff_diffs_matrix = vec![vec![0.0; num_players]; num_players];
        let mut score_diffs = vec![Vec::with_capacity(num_players * repetitions); num_players];
        for i in 0..num_players {
            for j in 0..num_players {
                let diffs: Vec<f64> = (0..repetitions)
                    .map(|r| (payoff[i][j][r] - payoff[j][i][r]) / turns_f)
                    .collect();
                payoff_diffs_matrix[i][j] = provider.mean(&diffs);
                score_diffs[i].extend_from_slice(&diffs);
            }
        }

        Self {
            scores,
            normalized_scores,
            ranking,
            ranked_names,
            payoff_matrix,
            payoff_stddevs,
            wins,
            payoff_diffs_matrix,
            score_diffs,
        }
    }
}
