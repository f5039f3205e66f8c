//! Reductions over the canonical cooperation tensor ("morality" metrics).
//!
//! These reductions are opt-in: they only run when the engine is constructed
//! with morality metrics enabled, since the two prestige ratings cost an
//! eigenvector computation each. Like the payoff summary, every field is
//! either wholly present or wholly absent.
//!
//! # Conventions
//!
//! - The cooperation matrix and the cooperating-rating numerator keep the
//!   diagonal exactly as the raw data carries it; rating denominators count
//!   `N - 1` opponents.
//! - The good-partner matrix only compares distinct pairs (diagonal stays
//!   zero), matching its rating denominator `(N - 1) * R`.
//! - Prestige ratings come from the dominant eigenvector of the normalized
//!   cooperation matrix (eigenjesus) and of its `[-1, 1]` vengeful remap
//!   (eigenmoses), each treated as a weighted directed graph.

use serde::Serialize;

use crate::{numeric::StatisticsProvider, reshape::CanonicalTensor};

/// Every field derived from the cooperation channel.
#[derive(Debug, Clone, Serialize)]
pub struct MoralitySummary {
    /// Total cooperation count per ordered pair, summed over repetitions,
    /// `[N][N]`.
    pub cooperation: Vec<Vec<f64>>,
    /// Cooperation matrix divided by `T * R`: a per-turn-per-repetition rate
    /// in `[0, 1]`, `[N][N]`.
    pub normalized_cooperation: Vec<Vec<f64>>,
    /// Normalized cooperation remapped to `[-1, 1]` via `2c - 1`, `[N][N]`.
    pub vengeful_cooperation: Vec<Vec<f64>>,
    /// Per player: cooperation given over `(N - 1) * T * R` opportunities,
    /// `[N]`.
    pub cooperating_rating: Vec<f64>,
    /// Per ordered pair: repetitions where player `i` cooperated at least as
    /// often as opponent `j`, `[N][N]`.
    pub good_partner_matrix: Vec<Vec<usize>>,
    /// Per player: good-partner row total over `(N - 1) * R` opportunities,
    /// `[N]`.
    pub good_partner_rating: Vec<f64>,
    /// Dominant eigenvector of the normalized cooperation matrix, `[N]`.
    pub eigenjesus_rating: Vec<f64>,
    /// Dominant eigenvector of the vengeful cooperation matrix, `[N]`.
    pub eigenmoses_rating: Vec<f64>,
}

impl MoralitySummary {
    /// Reduces the canonical cooperation tensor into the full summary.
    #[expect(clippy::cast_precision_loss)]
    pub(crate) fn from_canonical(
        cooperation_tensor: &CanonicalTensor,
        num_players: usize,
        turns: usize,
        repetitions: usize,
        provider: &dyn StatisticsProvider,
    ) -> Self {
        let per_pair_interactions = (turns * repetitions) as f64;
        let rating_opportunities =
            (num_players.saturating_sub(1) * turns * repetitions) as f64;
        let partner_opportunities = (num_players.saturating_sub(1) * repetitions) as f64;

        let cooperation: Vec<Vec<f64>> = (0..num_players)
            .map(|i| {
                (0..num_players)
                    .map(|j| cooperation_tensor[i][j].iter().sum())
                    .collect()
            })
            .collect();

        let normalized_cooperation: Vec<Vec<f64>> = cooperation
            .iter()
            .map(|row| row.iter().map(|total| total / per_pair_interactions).collect())
            .collect();

        let vengeful_cooperation: Vec<Vec<f64>> = normalized_cooperation
            .iter()
            .map(|row| row.iter().map(|rate| 2.0 * rate - 1.0).collect())
            .collect();

        let cooperating_rating: Vec<f64> = cooperation
            .iter()
            .map(|row| row.iter().sum::<f64>() / rating_opportunities)
            .collect();

        let mut good_partner_matrix = vec![vec![0; num_players]; num_players];
        for i in 0..num_players {
            for j in 0..num_players {
                if i == j {
                    continue;
                }
                good_partner_matrix[i][j] = (0..repetitions)
                    .filter(|&r| cooperation_tensor[i][j][r] >= cooperation_tensor[j][i][r])
                    .count();
            }
        }

        let good_partner_rating: Vec<f64> = good_partner_matrix
            .iter()
            .map(|row| row.iter().sum::<usize>() as f64 / partner_opportunities)
            .collect();

        let eigenjesus_rating = provider.dominant_eigenvector(&normalized_cooperation);
        let eigenmoses_rating = provider.dominant_eigenvector(&vengeful_cooperation);

        Self {
            cooperation,
            normalized_cooperation,
            vengeful_cooperation,
            cooperating_rating,
            good_partner_matrix,
            good_partner_rating,
            eigenjesus_rating,
            eigenmoses_rating,
        }
    }
}
