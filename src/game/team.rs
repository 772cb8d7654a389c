//! Per-team score history.
//!
//! `TeamState` keeps its fields private so the running total can only change
//! together with the round list.

use serde::{Deserialize, Serialize};

use crate::error::DominoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    A,
    B,
}

impl TeamSide {
    pub fn other(self) -> TeamSide {
        match self {
            TeamSide::A => TeamSide::B,
            TeamSide::B => TeamSide::A,
        }
    }

    /// Lowercase tag used in form bodies and element ids.
    pub fn as_str(self) -> &'static str {
        match self {
            TeamSide::A => "a",
            TeamSide::B => "b",
        }
    }
}

impl std::str::FromStr for TeamSide {
    type Err = DominoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "a" | "A" | "1" => Ok(TeamSide::A),
            "b" | "B" | "2" => Ok(TeamSide::B),
            other => Err(DominoError::InvalidTeam(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamState {
    name: String,
    round_scores: Vec<u32>,
    total: u32,
}

impl TeamState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            round_scores: Vec::new(),
            total: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Round scores in entry order.
    pub fn round_scores(&self) -> &[u32] {
        &self.round_scores
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Append a round score and add it to the total.
    pub fn record(&mut self, score: u32) {
        self.round_scores.push(score);
        self.total += score;
    }

    /// Remove the most recent round score. Returns it, or `None` when there is no history.
    pub fn undo_last(&mut self) -> Option<u32> {
        let last = self.round_scores.pop()?;
        self.total -= last;
        Some(last)
    }

    /// Drop every round score. The name is kept.
    pub fn clear(&mut self) {
        self.round_scores.clear();
        self.total = 0;
    }

    /// The last `n` round scores, oldest first.
    pub fn recent(&self, n: usize) -> &[u32] {
        let start = self.round_scores.len().saturating_sub(n);
        &self.round_scores[start..]
    }
}
