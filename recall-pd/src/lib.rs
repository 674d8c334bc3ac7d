//! # recall-pd
//!
//! Memory-driven Prisoner's Dilemma agents.
//!
//! An agent plays the iterated Prisoner's Dilemma against a human (or
//! scripted) opponent. Its moves are not computed by game theory: from the
//! third round on it recalls what the opponent did the last time the same
//! pair of moves was played, using an ACT-R style declarative memory from
//! `recall-core`.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │                  Host                     │
//! │   owns exactly one Box<dyn PdModel>       │
//! │  ┌────────────────────────────────────┐  │
//! │  │       DeclarativeEngine            │  │
//! │  │  RoundRecord · Scoreboard · Trace  │  │
//! │  │            │                       │  │
//! │  │            ▼                       │  │
//! │  │   DeclarativeMemory (recall-core)  │  │
//! │  └────────────────────────────────────┘  │
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `moves`: the two moves and their canonical labels
//! - `payoff`: the payoff matrix and running scores
//! - `round`: round record and turn state machine
//! - `experience`: encoding rounds as chunks
//! - `trace`: the time-stamped reasoning trace shown to the player
//! - `engine`: the declarative-only decision engine
//! - `strategy`: the protocol every interchangeable engine implements
//! - `host`: model selection and wholesale engine swapping
//! - `telemetry`: tracing subscriber setup

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod engine;
pub mod error;
pub mod experience;
pub mod host;
pub mod moves;
pub mod payoff;
pub mod round;
pub mod strategy;
pub mod telemetry;
pub mod trace;

pub use engine::{DeclarativeEngine, RoundOutcome};
pub use error::PdError;
pub use host::{Host, ModelRegistry};
pub use moves::Move;
pub use payoff::{Payoff, Scoreboard};
pub use strategy::{ModelSelection, PdModel};
