use serde::{Deserialize, Serialize};

use crate::game::{Board, Piece, Rules};

use super::{NegamaxSelector, RandomSelector};

/// Strategy for the computer participant.
pub trait MoveSelector {
    /// Pick a column from `legal`. Callers guarantee `legal` is non-empty.
    fn select_move(&mut self, board: &Board, legal: &[usize]) -> usize;

    /// Return the selector's display name.
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Random,
    Negamax,
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Strategy::Random),
            "negamax" => Ok(Strategy::Negamax),
            other => Err(format!(
                "unknown strategy '{other}' (expected 'random' or 'negamax')"
            )),
        }
    }
}

/// Computer opponent settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpponentConfig {
    pub strategy: Strategy,
    /// Search depth in plies for negamax.
    pub depth: usize,
    /// Fixed seed for the random selector; OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for OpponentConfig {
    fn default() -> Self {
        OpponentConfig {
            strategy: Strategy::Random,
            depth: 5,
            seed: None,
        }
    }
}

/// Build the selector named by `config`, playing `piece` under `rules`.
pub fn selector_from_config(
    config: &OpponentConfig,
    rules: Rules,
    piece: Piece,
) -> Box<dyn MoveSelector> {
    match config.strategy {
        Strategy::Random => match config.seed {
            Some(seed) => Box::new(RandomSelector::with_seed(seed)),
            None => Box::new(RandomSelector::new()),
        },
        Strategy::Negamax => Box::new(NegamaxSelector::new(config.depth, rules, piece)),
    }
}
