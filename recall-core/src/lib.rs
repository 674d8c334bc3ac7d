//! # recall-core
//!
//! Declarative-memory building blocks for memory-driven agents.
//!
//! Agents in this workspace do not follow a fixed algorithm. They store
//! labelled experiences as [`Chunk`]s and later recall the best-matching
//! one, the way ACT-R's declarative module does (Anderson & Lebiere, 1998):
//!
//! - **Chunks**: immutable slot/value records ([`chunk`])
//! - **Declarative memory**: the retrieval/storage contract and a reference
//!   store with base-level learning ([`memory`])
//! - **Activation**: base-level activation and retrieval latency ([`activation`])
//! - **Noise**: injectable random sources ([`noise`])
//!
//! ## Timing Model
//!
//! Nothing here sleeps. Time is a simulated clock (seconds, `f64`) owned by
//! the caller and passed into every memory operation; retrieval reports a
//! latency *value* which the caller adds to its clock.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod activation;
pub mod chunk;
pub mod config;
pub mod error;
pub mod memory;
pub mod noise;

pub use chunk::{Chunk, PublicChunk, snapshot_to_json};
pub use config::RecallConfig;
pub use error::RecallError;
pub use memory::{ChunkStore, DeclarativeMemory, Retrieval};
pub use noise::{FixedNoise, LogisticNoise, NoiseSource, ScriptedNoise};
