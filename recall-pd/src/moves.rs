//! The two moves of the Prisoner's Dilemma.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A player's choice in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Stay silent / play nice.
    Cooperate,
    /// Betray the other player.
    Defect,
}

impl Move {
    /// Both moves, cooperate first.
    pub const ALL: [Move; 2] = [Move::Cooperate, Move::Defect];

    /// Canonical short label, used for display and as a chunk slot value.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cooperate => "coop",
            Self::Defect => "defect",
        }
    }

    /// Parse a label. Only `"coop"` means cooperate; every other string,
    /// including typos and the empty string, is read as defect.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == Self::Cooperate.label() {
            Self::Cooperate
        } else {
            Self::Defect
        }
    }

    /// The other move.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Cooperate => Self::Defect,
            Self::Defect => Self::Cooperate,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The agent's and opponent's moves in the same round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovePair {
    /// The agent's move.
    pub agent: Move,
    /// The opponent's move.
    pub opponent: Move,
}

impl MovePair {
    /// Pair up two moves.
    #[must_use]
    pub fn new(agent: Move, opponent: Move) -> Self {
        Self { agent, opponent }
    }
}
