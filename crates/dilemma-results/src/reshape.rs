//! Reindexing raw outcome tensors into player-major canonical form.
//!
//! Raw tensors arrive repetition-major (`[r][i][j]`); every reducer wants to
//! walk a player pair's values across repetitions, so the canonical form is
//! player-major (`[i][j][r]`). The copy is a pure reindexing; no value is
//! transformed. For all valid indices:
//!
//! ```text
//! canonical[channel][i][j][r] == raw[channel][r][i][j]
//! ```

use std::collections::BTreeMap;

use crate::outcome::{OutcomeBundle, OutcomeError, RawTensor};

/// Player-major tensor of shape `[players][players][repetitions]`.
pub type CanonicalTensor = Vec<Vec<Vec<f64>>>;

/// Canonical (player-major) view of every channel in an outcome bundle.
#[derive(Debug, Clone)]
pub struct CanonicalResults {
    channels: BTreeMap<String, CanonicalTensor>,
}

impl CanonicalResults {
    /// Validates the bundle against the configured dimensions and reshapes
    /// every channel it carries.
    ///
    /// Channels are handled independently; the absence of one never blocks
    /// another. Validation runs first, so a shape violation in any channel
    /// fails the whole construction before anything is copied.
    pub fn from_bundle(
        bundle: &OutcomeBundle,
        num_players: usize,
        repetitions: usize,
    ) -> Result<Self, OutcomeError> {
        bundle.validate(num_players, repetitions)?;
        let channels = bundle
            .iter()
            .map(|(name, raw)| {
                (
                    name.to_string(),
                    reshape_channel(raw, num_players, repetitions),
                )
            })
            .collect();
        Ok(Self { channels })
    }

    /// Returns the canonical tensor for `channel`, if that channel was
    /// present in the source bundle.
    #[must_use]
    pub fn channel(&self, channel: &str) -> Option<&CanonicalTensor> {
        self.channels.get(channel)
    }
}

/// Copies one validated repetition-major tensor into a freshly allocated
/// player-major tensor of the full configured size.
fn reshape_channel(raw: &RawTensor, num_players: usize, repetitions: usize) -> CanonicalTensor {
    let mut canonical = vec![vec![vec![0.0; repetitions]; num_players]; num_players];
    for (r, block) in raw.iter().enumerate() {
        for (i, row) in block.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                canonical[i][j][r] = value;
            }
        }
    }
    canonical
}
