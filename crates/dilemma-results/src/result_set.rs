//! The frozen result set built from one tournament outcome bundle.
//!
//! Construction does all the work: validate the bundle's shape, reshape every
//! channel into player-major form, then run the payoff and (optionally)
//! morality reducers. The returned [`ResultSet`] is immutable; every derived
//! field is written exactly once before the value is published, so a
//! partially built instance is never observable and completed instances are
//! safe to share across threads.

use crate::{
    cooperation::MoralitySummary,
    export::{self, ExportError},
    numeric::{DefaultNumerics, StatisticsProvider},
    outcome::{COOPERATION_CHANNEL, OutcomeBundle, OutcomeError, PAYOFF_CHANNEL},
    payoff::PayoffSummary,
    reshape::{CanonicalResults, CanonicalTensor},
};

/// Summary statistics and rating matrices for one round-robin tournament.
///
/// The payoff-derived and cooperation-derived fields are grouped into
/// [`PayoffSummary`] and [`MoralitySummary`]; each group is computed wholly
/// or not at all. [`payoff`](Self::payoff) is `None` when the bundle carried
/// no payoff channel, and [`morality`](Self::morality) is `None` when the
/// cooperation channel was absent or morality metrics were disabled.
///
/// # Examples
///
/// ```
/// use dilemma_results::{OutcomeBundle, PAYOFF_CHANNEL, ResultSet};
///
/// let players = vec!["Alice".to_string(), "Bob".to_string()];
/// let bundle = OutcomeBundle::new()
///     .with_channel(PAYOFF_CHANNEL, vec![vec![vec![0.0, 5.0], vec![1.0, 0.0]]]);
/// let results = ResultSet::new(players, 5, 1, &bundle, true).unwrap();
///
/// let payoff = results.payoff().unwrap();
/// assert_eq!(payoff.ranked_names, vec!["Alice", "Bob"]);
/// assert!(results.morality().is_none()); // no cooperation channel
/// ```
#[derive(Debug, Clone)]
pub struct ResultSet {
    players: Vec<String>,
    turns: usize,
    repetitions: usize,
    canonical: CanonicalResults,
    payoff: Option<PayoffSummary>,
    morality: Option<MoralitySummary>,
}

impl ResultSet {
    /// Builds a result set with the default numeric backend.
    ///
    /// # Arguments
    ///
    /// * `players` - player names, in canonical index order
    /// * `turns` - turns per interaction (`T`); must be positive, a zero
    ///   value propagates non-finite numbers through every per-turn field
    /// * `repetitions` - round-robin repetitions (`R`)
    /// * `outcome` - raw repetition-major outcome bundle
    /// * `with_morality` - whether to compute cooperation-derived metrics
    ///   (skipping them saves the two eigenvector computations)
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError`] if any channel tensor does not have shape
    /// `[repetitions][players][players]`.
    pub fn new(
        players: Vec<String>,
        turns: usize,
        repetitions: usize,
        outcome: &OutcomeBundle,
        with_morality: bool,
    ) -> Result<Self, OutcomeError> {
        Self::from_outcome(
            players,
            turns,
            repetitions,
            outcome,
            with_morality,
            &DefaultNumerics,
        )
    }

    /// Builds a result set with an explicit [`StatisticsProvider`].
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError`] if any channel tensor does not have shape
    /// `[repetitions][players][players]`.
    pub fn from_outcome(
        players: Vec<String>,
        turns: usize,
        repetitions: usize,
        outcome: &OutcomeBundle,
        with_morality: bool,
        provider: &dyn StatisticsProvider,
    ) -> Result<Self, OutcomeError> {
        let canonical = CanonicalResults::from_bundle(outcome, players.len(), repetitions)?;

        let payoff = canonical.channel(PAYOFF_CHANNEL).map(|tensor| {
            PayoffSummary::from_canonical(tensor, &players, turns, repetitions, provider)
        });

        let morality = if with_morality {
            canonical.channel(COOPERATION_CHANNEL).map(|tensor| {
                MoralitySummary::from_canonical(
                    tensor,
                    players.len(),
                    turns,
                    repetitions,
                    provider,
                )
            })
        } else {
            None
        };

        Ok(Self {
            players,
            turns,
            repetitions,
            canonical,
            payoff,
            morality,
        })
    }

    /// Player names in canonical index order.
    #[must_use]
    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// Number of players (`N`).
    #[must_use]
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// Turns per interaction (`T`).
    #[must_use]
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Round-robin repetitions (`R`).
    #[must_use]
    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    /// Canonical player-major tensor for `channel`, if that channel was
    /// present in the source bundle.
    #[must_use]
    pub fn canonical_channel(&self, channel: &str) -> Option<&CanonicalTensor> {
        self.canonical.channel(channel)
    }

    /// Payoff-derived statistics, if the payoff channel was present.
    #[must_use]
    pub fn payoff(&self) -> Option<&PayoffSummary> {
        self.payoff.as_ref()
    }

    /// Cooperation-derived statistics, if the cooperation channel was present
    /// and morality metrics were enabled.
    #[must_use]
    pub fn morality(&self) -> Option<&MoralitySummary> {
        self.morality.as_ref()
    }

    /// Renders the normalized-score table: ranked names as the header, one
    /// comma-separated row per repetition in ranking order.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::PayoffUnavailable`] if the payoff channel was
    /// never processed; the export has an explicit unmet dependency rather
    /// than emitting blank data.
    pub fn csv(&self) -> Result<String, ExportError> {
        let payoff = self.payoff.as_ref().ok_or(ExportError::PayoffUnavailable)?;
        Ok(export::csv(payoff, self.repetitions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::RawTensor;

    fn names(players: &[&str]) -> Vec<String> {
        players.iter().map(|&p| p.to_string()).collect()
    }

    fn payoff_raw() -> RawTensor {
        vec![
            vec![vec![0.0, 6.0], vec![2.0, 0.0]],
            vec![vec![0.0, 4.0], vec![4.0, 0.0]],
        ]
    }

    fn cooperation_raw() -> RawTensor {
        vec![
            vec![vec![2.0, 1.0], vec![1.0, 2.0]],
            vec![vec![2.0, 2.0], vec![0.0, 2.0]],
        ]
    }

    fn full_bundle() -> OutcomeBundle {
        OutcomeBundle::new()
            .with_channel(PAYOFF_CHANNEL, payoff_raw())
            .with_channel(COOPERATION_CHANNEL, cooperation_raw())
    }

    #[test]
    fn test_both_summaries_present() {
        let results = ResultSet::new(names(&["A", "B"]), 2, 2, &full_bundle(), true).unwrap();
        assert!(results.payoff().is_some());
        assert!(results.morality().is_some());
        assert_eq!(results.num_players(), 2);
        assert_eq!(results.repetitions(), 2);
    }

    #[test]
    fn test_missing_channel_leaves_summary_unset() {
        let bundle = OutcomeBundle::new().with_channel(COOPERATION_CHANNEL, cooperation_raw());
        let results = ResultSet::new(names(&["A", "B"]), 2, 2, &bundle, true).unwrap();
        assert!(results.payoff().is_none());
        assert!(results.morality().is_some());
    }

    #[test]
    fn test_morality_flag_disables_cooperation_metrics() {
        let results = ResultSet::new(names(&["A", "B"]), 2, 2, &full_bundle(), false).unwrap();
        assert!(results.payoff().is_some());
        assert!(results.morality().is_none());
    }

    #[test]
    fn test_malformed_bundle_fails_construction() {
        let bundle = OutcomeBundle::new().with_channel(PAYOFF_CHANNEL, payoff_raw());
        assert!(ResultSet::new(names(&["A", "B", "C"]), 2, 2, &bundle, true).is_err());
    }

    #[test]
    fn test_canonical_channel_round_trip() {
        let results = ResultSet::new(names(&["A", "B"]), 2, 2, &full_bundle(), true).unwrap();
        let raw = payoff_raw();
        let tensor = results.canonical_channel(PAYOFF_CHANNEL).unwrap();
        for r in 0..2 {
            for i in 0..2 {
                for j in 0..2 {
                    assert_eq!(tensor[i][j][r], raw[r][i][j]);
                }
            }
        }
    }

    #[test]
    fn test_csv_requires_payoff() {
        let bundle = OutcomeBundle::new().with_channel(COOPERATION_CHANNEL, cooperation_raw());
        let results = ResultSet::new(names(&["A", "B"]), 2, 2, &bundle, true).unwrap();
        assert!(results.csv().is_err());

        let results = ResultSet::new(names(&["A", "B"]), 2, 2, &full_bundle(), true).unwrap();
        let table = results.csv().unwrap();
        assert_eq!(table.lines().count(), 1 + 2);
    }

    #[test]
    fn test_construction_is_deterministic() {
        let first = ResultSet::new(names(&["A", "B"]), 2, 2, &full_bundle(), true).unwrap();
        let second = ResultSet::new(names(&["A", "B"]), 2, 2, &full_bundle(), true).unwrap();
        let (a, b) = (first.payoff().unwrap(), second.payoff().unwrap());
        assert_eq!(a.scores, b.scores);
        assert_eq!(a.payoff_stddevs, b.payoff_stddevs);
        let (a, b) = (first.morality().unwrap(), second.morality().unwrap());
        assert_eq!(a.eigenjesus_rating, b.eigenjesus_rating);
        assert_eq!(a.eigenmoses_rating, b.eigenmoses_rating);
    }
}
