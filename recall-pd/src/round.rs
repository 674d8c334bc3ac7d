//! Round record and turn state machine.
//!
//! ```text
//!  reset ──► AwaitingDecision ──decide──► AwaitingOpponentAction
//!                   ▲                              │ observe
//!                   └──────decide (same turn)◄── Scored
//! ```
//!
//! Which decision branch runs is driven by an explicit [`RoundPhase`], not
//! by inspecting which move slots happen to be filled.

use serde::{Deserialize, Serialize};

use crate::moves::{Move, MovePair};

/// How much history the next decision can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round has been played.
    First,
    /// Exactly one round has been played.
    Second,
    /// Two or more rounds have been played; memory is consulted.
    SteadyState,
}

impl RoundPhase {
    /// Phase of the decision after this one.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second | Self::SteadyState => Self::SteadyState,
        }
    }
}

/// Where the engine is within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// Ready to decide the agent's move.
    AwaitingDecision,
    /// A move is committed; only the opponent's response may follow.
    AwaitingOpponentAction {
        /// Phase in which the pending move was decided.
        decided_in: RoundPhase,
    },
    /// The round has been scored and encoded.
    Scored,
}

/// The moves of the two most recent rounds.
///
/// `last_*` is the round before `current_*`. The current opponent slot stays
/// empty between a decision and the opponent's response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    phase: RoundPhase,
    last_agent: Option<Move>,
    last_opponent: Option<Move>,
    current_agent: Option<Move>,
    current_opponent: Option<Move>,
}

impl Default for RoundRecord {
    fn default() -> Self {
        Self {
            phase: RoundPhase::First,
            last_agent: None,
            last_opponent: None,
            current_agent: None,
            current_opponent: None,
        }
    }
}

impl RoundRecord {
    /// An empty record for a fresh session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Phase of the next decision.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// The older pair, once both of its moves are known.
    #[must_use]
    pub fn last(&self) -> Option<MovePair> {
        Some(MovePair::new(self.last_agent?, self.last_opponent?))
    }

    /// The newest pair, once the opponent has answered.
    #[must_use]
    pub fn current(&self) -> Option<MovePair> {
        Some(MovePair::new(self.current_agent?, self.current_opponent?))
    }

    /// The agent's most recently committed move.
    #[must_use]
    pub fn current_agent(&self) -> Option<Move> {
        self.current_agent
    }

    /// The opponent's most recently observed move.
    #[must_use]
    pub fn current_opponent(&self) -> Option<Move> {
        self.current_opponent
    }

    /// Whether no slot is filled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.last_agent.is_none()
            && self.last_opponent.is_none()
            && self.current_agent.is_none()
            && self.current_opponent.is_none()
    }

    /// Move the completed current pair into the `last` slots and return it.
    ///
    /// Leaves the record untouched when the current pair is incomplete.
    pub fn shift(&mut self) -> Option<MovePair> {
        let pair = self.current()?;
        self.last_agent = Some(pair.agent);
        self.last_opponent = Some(pair.opponent);
        Some(pair)
    }

    /// Commit the agent's next move and advance the phase.
    pub fn commit(&mut self, agent: Move) {
        self.current_agent = Some(agent);
        self.current_opponent = None;
        self.phase = self.phase.next();
    }

    /// Record the opponent's answer to the committed move.
    pub fn observe(&mut self, opponent: Move) {
        self.current_opponent = Some(opponent);
    }
}
