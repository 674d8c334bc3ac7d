//! The declarative-only decision engine.
//!
//! No production rules, no buffers: the engine drives declarative memory
//! directly. Timing is approximate. Each decision costs a fixed amount of
//! simulated time plus whatever latency the memory reports.
//!
//! ## Policy
//!
//! | Phase         | Move                                                   |
//! |---------------|--------------------------------------------------------|
//! | `First`       | random, from the sign of one noise sample              |
//! | `Second`      | tit for tat                                            |
//! | `SteadyState` | recall what the opponent did after the previous pair; tit for tat if recall fails |
//!
//! From the second scored round on, the pair before the one just scored is
//! encoded as an experience `(agent, opponent) → next opponent move` and
//! stored, so the first steady-state decision can already recall it.

use recall_core::config::EngineConfig;
use recall_core::{Chunk, ChunkStore, DeclarativeMemory, LogisticNoise, NoiseSource, PublicChunk, RecallConfig};
use tracing::{debug, info, warn};

use crate::error::{PdError, Result};
use crate::experience::{self, EXPERIENCE_PREFIX};
use crate::moves::{Move, MovePair};
use crate::payoff::{Payoff, Scoreboard};
use crate::round::{RoundPhase, RoundRecord, TurnState};
use crate::strategy::PdModel;
use crate::trace::Trace;

const MODEL_TEXT: &str = "Declarative-only Prisoner's Dilemma model.\n\
Round 1: random pick. Round 2: tit for tat.\n\
Afterwards: retrieve what the opponent did after the previous pair of moves; \
tit for tat when retrieval fails.\n";

/// Result of scoring one round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundOutcome {
    /// The agent's move in the scored round.
    pub agent_move: Move,
    /// The opponent's move in the scored round.
    pub opponent_move: Move,
    /// Points for this round.
    pub payoff: Payoff,
    /// Agent total after this round.
    pub agent_total: i32,
    /// Opponent total after this round.
    pub opponent_total: i32,
    /// Experience handed to memory, if one was encoded.
    pub experience: Option<Chunk>,
    /// The move committed for the following round.
    pub next_move: Move,
}

/// Plays the iterated Prisoner's Dilemma from declarative memory alone.
#[derive(Debug)]
pub struct DeclarativeEngine<M = ChunkStore, N = LogisticNoise> {
    memory: M,
    noise: N,
    config: EngineConfig,
    time: f64,
    round: RoundRecord,
    turn: TurnState,
    scores: Scoreboard,
    feedback: String,
    trace: Trace,
    experiences: u64,
}

impl DeclarativeEngine<ChunkStore, LogisticNoise> {
    /// Build an engine with an ACT-R [`ChunkStore`] from configuration.
    ///
    /// With `general.seed` set, the opening move and the memory noise are
    /// both reproducible.
    ///
    /// # Errors
    /// Returns [`PdError::Core`] if the configuration is out of range.
    pub fn from_config(config: &RecallConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Like [`Self::from_config`] for a configuration already validated.
    #[must_use]
    pub fn from_valid_config(config: &RecallConfig) -> Self {
        let seed = config.general.seed;
        let memory = ChunkStore::new(config.memory.clone(), seed.map(|s| s.wrapping_add(1)));
        Self::new(memory, LogisticNoise::from_seed_option(seed), config.engine.clone())
    }
}

impl<M: DeclarativeMemory, N: NoiseSource> DeclarativeEngine<M, N> {
    /// Create an engine awaiting its first decision.
    pub fn new(memory: M, noise: N, config: EngineConfig) -> Self {
        Self {
            memory,
            noise,
            config,
            time: 0.0,
            round: RoundRecord::new(),
            turn: TurnState::AwaitingDecision,
            scores: Scoreboard::default(),
            feedback: String::new(),
            trace: Trace::default(),
            experiences: 0,
        }
    }

    /// Start a new session: zero the scores, clear feedback, trace and round
    /// record, then commit the opening move.
    ///
    /// Memory and the simulated clock are left alone, so earlier
    /// experiences keep their place in time.
    pub fn reset(&mut self) -> Move {
        info!(time = self.time, "resetting session");
        self.scores = Scoreboard::default();
        self.feedback.clear();
        self.round = RoundRecord::new();
        self.trace.clear();
        self.turn = TurnState::AwaitingDecision;
        self.decide()
    }

    /// Decide the agent's next move.
    ///
    /// # Errors
    /// Returns [`PdError::DecisionPending`], leaving all state untouched, if
    /// the previous move has not been answered yet.
    pub fn decide_next_move(&mut self) -> Result<Move> {
        if matches!(self.turn, TurnState::AwaitingOpponentAction { .. }) {
            debug!("decision requested while awaiting the opponent; rejected");
            return Err(PdError::DecisionPending);
        }
        Ok(self.decide())
    }

    /// Score the opponent's answer, encode the experience, and commit the
    /// next move.
    ///
    /// Returns `None` and changes nothing when no move is pending.
    pub fn observe_opponent_move(&mut self, opponent: Move) -> Option<RoundOutcome> {
        let TurnState::AwaitingOpponentAction { .. } = self.turn else {
            debug!(%opponent, "opponent move with no pending decision; ignored");
            return None;
        };
        let agent = self.round.current_agent()?;
        let prior = self.round.last();

        self.trace.push(self.time, format!("Opponent chooses {opponent}"));
        self.round.observe(opponent);
        let payoff = self.scores.record(agent, opponent);
        self.feedback = self.scores.feedback(agent);

        let experience = prior.map(|pair| self.encode(pair, opponent));

        self.time += self.config.response_time;
        self.turn = TurnState::Scored;
        let next_move = self.decide();

        Some(RoundOutcome {
            agent_move: agent,
            opponent_move: opponent,
            payoff,
            agent_total: self.scores.agent,
            opponent_total: self.scores.opponent,
            experience,
            next_move,
        })
    }

    /// [`Self::observe_opponent_move`] for a move label. Anything other than
    /// `"coop"` counts as defect.
    pub fn choose(&mut self, action: &str) -> Option<RoundOutcome> {
        self.observe_opponent_move(Move::from_label(action))
    }

    /// Outcome text of the last scored round.
    #[must_use]
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    /// Reasoning trace of the current session.
    #[must_use]
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Running totals.
    #[must_use]
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Round record.
    #[must_use]
    pub fn round(&self) -> &RoundRecord {
        &self.round
    }

    /// Turn state.
    #[must_use]
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// The committed move awaiting the opponent, if any.
    #[must_use]
    pub fn pending_move(&self) -> Option<Move> {
        match self.turn {
            TurnState::AwaitingOpponentAction { .. } => self.round.current_agent(),
            _ => None,
        }
    }

    /// Simulated time in seconds.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// The memory behind this engine.
    #[must_use]
    pub fn memory(&self) -> &M {
        &self.memory
    }

    fn decide(&mut self) -> Move {
        let phase = self.round.phase();
        let (next, latency, note) = match (phase, self.round.shift()) {
            (RoundPhase::First, _) => self.open(),
            (RoundPhase::Second, Some(prev)) => {
                (prev.opponent, 0.0, "Second decision: tit for tat".to_string())
            }
            (RoundPhase::SteadyState, Some(prev)) => self.recall(prev),
            (_, None) => {
                warn!(?phase, "previous round incomplete; deciding from scratch");
                self.open()
            }
        };

        self.time += self.config.decision_time + latency;
        self.trace.push(self.time, note);
        self.round.commit(next);
        self.turn = TurnState::AwaitingOpponentAction { decided_in: phase };
        debug!(?phase, %next, latency, time = self.time, "decided");
        next
    }

    fn open(&mut self) -> (Move, f64, String) {
        let next = if self.noise.coin(self.config.opening_noise) {
            Move::Cooperate
        } else {
            Move::Defect
        };
        (next, 0.0, "First decision: random pick".to_string())
    }

    fn recall(&mut self, prev: MovePair) -> (Move, f64, String) {
        let query = experience::query(prev);
        let retrieval = self.memory.retrieve(&query, self.time);
        let latency = retrieval.latency.max(0.0);

        match retrieval.chunk {
            Some(chunk) => match experience::predicted_move(&chunk) {
                Some(predicted) => {
                    debug!(%chunk, latency, "retrieval succeeded");
                    (predicted, latency, format!("Retrieving {chunk}"))
                }
                None => {
                    debug!(%chunk, "retrieved chunk has no resulting move; tit for tat");
                    (prev.opponent, latency, "Failed retrieval, tit for tat instead".to_string())
                }
            },
            None => {
                debug!(latency, "retrieval failed; tit for tat");
                (prev.opponent, latency, "Failed retrieval, tit for tat instead".to_string())
            }
        }
    }

    fn encode(&mut self, pair: MovePair, resulting: Move) -> Chunk {
        self.experiences += 1;
        let chunk = experience::experience(
            format!("{EXPERIENCE_PREFIX}{}", self.experiences),
            pair,
            resulting,
        );
        debug!(%chunk, "storing experience");
        self.memory.store(chunk.clone(), self.time);
        chunk
    }
}

impl<M: DeclarativeMemory, N: NoiseSource> PdModel for DeclarativeEngine<M, N> {
    fn reset(&mut self) {
        DeclarativeEngine::reset(self);
    }

    fn run(&mut self) -> Result<Move> {
        self.decide_next_move()
    }

    fn choose(&mut self, action: &str) {
        DeclarativeEngine::choose(self, action);
    }

    fn waiting_for_action(&self) -> bool {
        matches!(self.turn, TurnState::AwaitingOpponentAction { .. })
    }

    fn feedback(&self) -> &str {
        &self.feedback
    }

    fn trace(&self) -> &Trace {
        &self.trace
    }

    fn agent_score(&self) -> i32 {
        self.scores.agent
    }

    fn opponent_score(&self) -> i32 {
        self.scores.opponent
    }

    fn dm_content(&self) -> Vec<PublicChunk> {
        self.memory.snapshot(self.time)
    }

    fn model_text(&self) -> &str {
        MODEL_TEXT
    }

    fn time(&self) -> f64 {
        self.time
    }
}
