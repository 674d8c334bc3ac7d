//! Encoding rounds as declarative-memory chunks.
//!
//! An experience records what the opponent did right after a given pair of
//! moves: `(agent, opponent) → resulting-opponent`.

use recall_core::Chunk;

use crate::moves::{Move, MovePair};

/// Slot holding the agent's move of the remembered round.
pub const AGENT_SLOT: &str = "agent";
/// Slot holding the opponent's move of the remembered round.
pub const OPPONENT_SLOT: &str = "opponent";
/// Slot holding the opponent's move in the round that followed.
pub const RESULT_SLOT: &str = "resulting-opponent";

/// Chunk name prefix for stored experiences.
pub const EXPERIENCE_PREFIX: &str = "instance";

/// Probe for experiences that started from `pair`.
#[must_use]
pub fn query(pair: MovePair) -> Chunk {
    Chunk::new("query")
        .with_slot(AGENT_SLOT, pair.agent.label())
        .with_slot(OPPONENT_SLOT, pair.opponent.label())
}

/// A fully determined experience chunk.
#[must_use]
pub fn experience(name: impl Into<String>, pair: MovePair, resulting: Move) -> Chunk {
    Chunk::new(name)
        .with_slot(AGENT_SLOT, pair.agent.label())
        .with_slot(OPPONENT_SLOT, pair.opponent.label())
        .with_slot(RESULT_SLOT, resulting.label())
}

/// The predicted opponent move carried by a retrieved chunk, if it has one.
#[must_use]
pub fn predicted_move(chunk: &Chunk) -> Option<Move> {
    chunk.slot(RESULT_SLOT).map(Move::from_label)
}
