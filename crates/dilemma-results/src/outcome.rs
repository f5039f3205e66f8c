//! Raw outcome bundle produced by a round-robin tournament run.
//!
//! The bundle maps metric-channel names to repetition-major tensors: for a
//! channel `c`, `bundle[c][r][i][j]` is the value player `i` obtained against
//! opponent `j` in repetition `r`. The result engine consumes the bundle
//! through [`crate::reshape::CanonicalResults`], which validates shapes and
//! reindexes into player-major form.
//!
//! # Serialization
//!
//! The bundle serializes as a plain JSON object keyed by channel name:
//!
//! ```json
//! {
//!   "payoff": [[[3.0, 0.0], [5.0, 1.0]]],
//!   "cooperation": [[[2.0, 1.0], [1.0, 2.0]]]
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Channel name carrying per-pair payoff totals.
pub const PAYOFF_CHANNEL: &str = "payoff";

/// Channel name carrying per-pair cooperation counts.
pub const COOPERATION_CHANNEL: &str = "cooperation";

/// Repetition-major tensor of shape `[repetitions][players][players]`.
pub type RawTensor = Vec<Vec<Vec<f64>>>;

/// Per-channel raw interaction outcomes for one tournament run.
///
/// Channels are independent: a bundle may carry any subset of them, and
/// reducers that depend on an absent channel are simply skipped. Channel
/// names other than [`PAYOFF_CHANNEL`] and [`COOPERATION_CHANNEL`] are
/// accepted and reshaped but drive no built-in reduction.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct OutcomeBundle {
    channels: BTreeMap<String, RawTensor>,
}

/// Shape violation detected while validating an outcome bundle.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum OutcomeError {
    #[display("channel '{channel}' has {actual} repetition slices, expected {expected}")]
    RepetitionCountMismatch {
        channel: String,
        expected: usize,
        actual: usize,
    },
    #[display(
        "channel '{channel}', repetition {repetition}: found a {rows}x{columns} block, expected {expected}x{expected}"
    )]
    PlayerCountMismatch {
        channel: String,
        repetition: usize,
        expected: usize,
        rows: usize,
        columns: usize,
    },
}

impl OutcomeBundle {
    /// Creates an empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a channel tensor.
    pub fn insert(&mut self, channel: impl Into<String>, tensor: RawTensor) {
        self.channels.insert(channel.into(), tensor);
    }

    /// Builder-style variant of [`insert`](Self::insert).
    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>, tensor: RawTensor) -> Self {
        self.insert(channel, tensor);
        self
    }

    /// Returns the raw tensor for `channel`, if present.
    #[must_use]
    pub fn get(&self, channel: &str) -> Option<&RawTensor> {
        self.channels.get(channel)
    }

    /// Iterates over `(channel name, raw tensor)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawTensor)> {
        self.channels
            .iter()
            .map(|(name, tensor)| (name.as_str(), tensor))
    }

    /// Checks that every channel tensor has shape
    /// `[repetitions][num_players][num_players]`.
    ///
    /// Fails fast on the first violation; no reducer may run on a bundle that
    /// has not passed this check.
    pub fn validate(&self, num_players: usize, repetitions: usize) -> Result<(), OutcomeError> {
        for (channel, tensor) in &self.channels {
            if tensor.len() != repetitions {
                return Err(OutcomeError::RepetitionCountMismatch {
                    channel: channel.clone(),
                    expected: repetitions,
                    actual: tensor.len(),
                });
            }
            for (repetition, block) in tensor.iter().enumerate() {
                if block.len() != num_players
                    || block.iter().any(|row| row.len() != num_players)
                {
                    return Err(OutcomeError::PlayerCountMismatch {
                        channel: channel.clone(),
                        repetition,
                        expected: num_players,
                        rows: block.len(),
                        columns: block.iter().map(Vec::len).max().unwrap_or(0),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_block(n: usize, value: f64) -> Vec<Vec<f64>> {
        vec![vec![value; n]; n]
    }

    #[test]
    fn test_validate_accepts_well_formed_bundle() {
        let bundle = OutcomeBundle::new()
            .with_channel(PAYOFF_CHANNEL, vec![square_block(3, 1.0); 2])
            .with_channel(COOPERATION_CHANNEL, vec![square_block(3, 0.0); 2]);
        assert!(bundle.validate(3, 2).is_ok());
    }

    #[test]
    fn test_validate_rejects_repetition_count() {
        let bundle = OutcomeBundle::new().with_channel(PAYOFF_CHANNEL, vec![square_block(2, 0.0)]);
        let err = bundle.validate(2, 3).unwrap_err();
        assert!(matches!(
            err,
            OutcomeError::RepetitionCountMismatch {
                expected: 3,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_validate_rejects_ragged_block() {
        let mut block = square_block(2, 0.0);
        block[1].push(7.0);
        let bundle = OutcomeBundle::new().with_channel(PAYOFF_CHANNEL, vec![block]);
        let err = bundle.validate(2, 1).unwrap_err();
        assert!(matches!(
            err,
            OutcomeError::PlayerCountMismatch {
                repetition: 0,
                expected: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let bundle =
            OutcomeBundle::new().with_channel(PAYOFF_CHANNEL, vec![square_block(2, 3.0)]);
        let json = serde_json::to_string(&bundle).unwrap();
        let parsed: OutcomeBundle = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.get(PAYOFF_CHANNEL), bundle.get(PAYOFF_CHANNEL));
    }
}
