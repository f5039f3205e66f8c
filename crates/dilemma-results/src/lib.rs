//! Tournament result aggregation for round-robin simulations.
//!
//! This crate turns raw per-repetition, per-player-pair interaction outcomes
//! into summary statistics and rating matrices: scores and rankings, payoff
//! matrices with dispersion, win counts, payoff-difference matrices,
//! cooperation and good-partner ratings, and eigenvector prestige scores.
//!
//! # Overview
//!
//! The pipeline is one eager pass at construction time:
//!
//! 1. **Outcome bundle** ([`OutcomeBundle`]): repetition-major tensors, one
//!    per metric channel (`payoff`, `cooperation`), validated for shape
//! 2. **Canonical reshape** ([`reshape::CanonicalResults`]): reindexed into
//!    player-major form so reducers walk each pair across repetitions
//! 3. **Payoff reduction** ([`PayoffSummary`]): scores, normalized scores,
//!    ranking, payoff matrix and stddev, wins, payoff differences
//! 4. **Morality reduction** ([`MoralitySummary`], optional): cooperation
//!    matrices and ratings, good-partner metrics, eigenjesus/eigenmoses
//!    prestige ratings
//! 5. **Export** ([`ResultSet::csv`]): the normalized-score table
//!
//! The finished [`ResultSet`] is immutable; once constructed it is safe to
//! read from any number of threads.
//!
//! Numeric primitives (mean, population stddev, dominant eigenvector) go
//! through the [`numeric::StatisticsProvider`] trait, with a default backend
//! in `dilemma-stats`.
//!
//! # Examples
//!
//! ```
//! use dilemma_results::{COOPERATION_CHANNEL, OutcomeBundle, PAYOFF_CHANNEL, ResultSet};
//!
//! // 2 players, 2 turns per interaction, 1 repetition.
//! let players = vec!["Tit For Tat".to_string(), "Defector".to_string()];
//! let bundle = OutcomeBundle::new()
//!     .with_channel(PAYOFF_CHANNEL, vec![vec![vec![0.0, 1.0], vec![6.0, 0.0]]])
//!     .with_channel(COOPERATION_CHANNEL, vec![vec![vec![2.0, 1.0], vec![0.0, 0.0]]]);
//!
//! let results = ResultSet::new(players, 2, 1, &bundle, true).unwrap();
//!
//! let payoff = results.payoff().unwrap();
//! assert_eq!(payoff.ranked_names, vec!["Defector", "Tit For Tat"]);
//!
//! let morality = results.morality().unwrap();
//! assert_eq!(morality.normalized_cooperation[0][1], 0.5);
//!
//! println!("{}", results.csv().unwrap());
//! ```

pub mod cooperation;
pub mod export;
pub mod numeric;
pub mod outcome;
pub mod payoff;
pub mod reshape;
pub mod result_set;

pub use self::{
    cooperation::MoralitySummary,
    export::ExportError,
    outcome::{COOPERATION_CHANNEL, OutcomeBundle, OutcomeError, PAYOFF_CHANNEL, RawTensor},
    payoff::PayoffSummary,
    result_set::ResultSet,
};
