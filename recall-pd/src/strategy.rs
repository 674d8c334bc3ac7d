//! The protocol shared by every interchangeable Prisoner's Dilemma engine.
//!
//! A host talks to engines only through [`PdModel`], so production-rule
//! models, hand-written approximations and the declarative-only engine can be
//! swapped without the host changing.

use recall_core::PublicChunk;

use crate::error::Result;
use crate::moves::Move;
use crate::trace::Trace;

/// Capability interface of a Prisoner's Dilemma engine.
pub trait PdModel {
    /// Start a new session and commit the first move.
    fn reset(&mut self);

    /// Decide the agent's next move.
    ///
    /// # Errors
    /// Returns [`crate::PdError::DecisionPending`] while a move is already
    /// awaiting the opponent's response.
    fn run(&mut self) -> Result<Move>;

    /// The opponent answered with `action` (`"coop"` or `"defect"`).
    /// Ignored when no move is pending.
    fn choose(&mut self, action: &str);

    /// Whether a committed move awaits the opponent.
    fn waiting_for_action(&self) -> bool;

    /// Outcome text of the last scored round.
    fn feedback(&self) -> &str;

    /// Reasoning trace of the current session.
    fn trace(&self) -> &Trace;

    /// The agent's total score.
    fn agent_score(&self) -> i32;

    /// The opponent's total score.
    fn opponent_score(&self) -> i32;

    /// Declarative memory contents for display.
    fn dm_content(&self) -> Vec<PublicChunk>;

    /// Source or description of the model, for display.
    fn model_text(&self) -> &str {
        ""
    }

    /// Simulated time in seconds.
    fn time(&self) -> f64;
}

/// The models a host can cycle through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelSelection {
    /// Stevens' model interpreted by a full ACT-R production system.
    StevensStandard,
    /// Stevens' model with a hand-written production cycle.
    StevensSwiftActr,
    /// Stevens' model using declarative memory only.
    StevensSwiftFree,
    /// Lebiere's model interpreted by a full ACT-R production system.
    LebiereStandard,
    /// Counting model.
    CountModel,
    /// Time estimation model.
    TimeModel,
}

impl ModelSelection {
    /// Every selection in cycling order.
    pub const ALL: [ModelSelection; 6] = [
        Self::StevensStandard,
        Self::StevensSwiftActr,
        Self::StevensSwiftFree,
        Self::LebiereStandard,
        Self::CountModel,
        Self::TimeModel,
    ];

    /// Human-readable name.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::StevensStandard => "Stevens model, standard ACT-R",
            Self::StevensSwiftActr => "Stevens model, swift ACT-R style",
            Self::StevensSwiftFree => "Stevens model, swift free style",
            Self::LebiereStandard => "Lebiere model, standard ACT-R",
            Self::CountModel => "Count model",
            Self::TimeModel => "Time estimation",
        }
    }

    /// The following selection, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}
