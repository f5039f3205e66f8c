//! Loading tournament outcome documents from JSON.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;
use dilemma_results::{OutcomeBundle, ResultSet};
use serde::Deserialize;

/// On-disk form of one tournament run: the engine's configuration plus the
/// raw outcome tensors.
#[derive(Debug, Clone, Deserialize)]
pub struct OutcomeDocument {
    /// Player names in canonical index order.
    pub players: Vec<String>,
    /// Turns per interaction.
    pub turns: usize,
    /// Round-robin repetitions.
    pub repetitions: usize,
    /// Channel name to repetition-major tensor.
    pub outcome: OutcomeBundle,
}

impl OutcomeDocument {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open outcome file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let document = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse outcome file: {}", path.display()))?;
        Ok(document)
    }

    pub fn into_result_set(self, with_morality: bool) -> anyhow::Result<ResultSet> {
        ResultSet::new(
            self.players,
            self.turns,
            self.repetitions,
            &self.outcome,
            with_morality,
        )
        .context("Outcome bundle failed shape validation")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_parses_and_builds() {
        let json = r#"{
            "players": ["Alice", "Bob"],
            "turns": 2,
            "repetitions": 1,
            "outcome": {
                "payoff": [[[0.0, 6.0], [2.0, 0.0]]],
                "cooperation": [[[2.0, 1.0], [1.0, 2.0]]]
            }
        }"#;
        let document: OutcomeDocument = serde_json::from_str(json).unwrap();
        assert_eq!(document.players, vec!["Alice", "Bob"]);

        let results = document.into_result_set(true).unwrap();
        assert_eq!(results.payoff().unwrap().ranked_names, vec!["Alice", "Bob"]);
        assert!(results.morality().is_some());
    }
}
