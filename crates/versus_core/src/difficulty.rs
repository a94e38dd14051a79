//! Bot difficulty levels.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How often the bot exploits a winning or blocking cell it has found.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Takes a found win or block one time in four.
    Easy,
    /// Takes a found win or block half the time.
    #[default]
    Medium,
    /// Always takes a found win or block.
    Hard,
}

impl Difficulty {
    /// Probability of keeping a found win/block instead of moving randomly.
    pub fn win_bias(self) -> f64 {
        match self {
            Self::Easy => 0.25,
            Self::Medium => 0.50,
            Self::Hard => 1.0,
        }
    }

    /// Next level, wrapping from hard back to easy.
    #[instrument]
    pub fn cycle(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }
}
