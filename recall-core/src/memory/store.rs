//! Reference ACT-R declarative memory.
//!
//! Chunks are matched exactly on the query's slots. Among matches, the one
//! with the highest noisy base-level activation is retrieved if it reaches
//! the retrieval threshold. Storing a chunk whose content is already known
//! reinforces the existing chunk instead of adding a duplicate.

use ordered_float::OrderedFloat;
use tracing::trace;

use crate::activation;
use crate::chunk::{Chunk, PublicChunk};
use crate::config::MemoryParams;
use crate::memory::{DeclarativeMemory, Retrieval};
use crate::noise::{LogisticNoise, NoiseSource};

/// A chunk together with its presentation history.
#[derive(Debug, Clone)]
struct StoredChunk {
    chunk: Chunk,
    references: Vec<f64>,
}

/// In-process declarative memory with base-level learning and logistic noise.
#[derive(Debug, Clone)]
pub struct ChunkStore<N = LogisticNoise> {
    params: MemoryParams,
    noise: N,
    chunks: Vec<StoredChunk>,
}

impl ChunkStore<LogisticNoise> {
    /// Create a store drawing noise from `seed`, or OS entropy when `None`.
    #[must_use]
    pub fn new(params: MemoryParams, seed: Option<u64>) -> Self {
        Self::with_noise(params, LogisticNoise::from_seed_option(seed))
    }
}

impl<N: NoiseSource> ChunkStore<N> {
    /// Create a store with an explicit noise source.
    pub fn with_noise(params: MemoryParams, noise: N) -> Self {
        Self {
            params,
            noise,
            chunks: Vec::new(),
        }
    }

    /// Parameters in effect.
    #[must_use]
    pub fn params(&self) -> &MemoryParams {
        &self.params
    }

    /// Noiseless activation of the chunk named `name` at `now`.
    #[must_use]
    pub fn activation_of(&self, name: &str, now: f64) -> Option<f64> {
        self.chunks
            .iter()
            .find(|s| s.chunk.name() == name)
            .map(|s| self.base_level(s, now))
    }

    /// Number of presentations recorded for the chunk named `name`.
    #[must_use]
    pub fn reference_count(&self, name: &str) -> Option<usize> {
        self.chunks
            .iter()
            .find(|s| s.chunk.name() == name)
            .map(|s| s.references.len())
    }

    /// Iterate over the stored chunks in insertion order.
    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.iter().map(|s| &s.chunk)
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.chunks.clear();
    }

    fn base_level(&self, stored: &StoredChunk, now: f64) -> f64 {
        if self.params.base_level_learning {
            activation::base_level(&stored.references, now, self.params.decay)
        } else {
            0.0
        }
    }

    fn noise_sample(&mut self) -> f64 {
        match self.params.activation_noise {
            Some(s) if s > 0.0 => self.noise.noise(s),
            _ => 0.0,
        }
    }

    fn latency(&self, activation: f64) -> f64 {
        activation::latency(
            activation,
            self.params.latency_factor,
            self.params.latency_exponent,
        )
    }
}

impl<N: NoiseSource> DeclarativeMemory for ChunkStore<N> {
    fn retrieve(&mut self, query: &Chunk, now: f64) -> Retrieval {
        let candidates: Vec<(usize, f64)> = self
            .chunks
            .iter()
            .enumerate()
            .filter(|(_, s)| s.chunk.matches(query))
            .map(|(i, s)| (i, self.base_level(s, now)))
            .collect();

        let best = candidates
            .into_iter()
            .map(|(i, base)| (i, base + self.noise_sample()))
            .max_by_key(|&(_, a)| OrderedFloat(a));

        let threshold = self.params.retrieval_threshold;
        match best {
            Some((i, a)) if a >= threshold => {
                let chunk = self.chunks[i].chunk.clone();
                trace!(chunk = %chunk, activation = a, "retrieved");
                Retrieval::hit(self.latency(a), chunk)
            }
            Some((_, a)) => {
                trace!(activation = a, threshold, "best match below threshold");
                Retrieval::miss(self.latency(threshold))
            }
            None => {
                trace!(query = %query, "no matching chunk");
                Retrieval::miss(self.latency(threshold))
            }
        }
    }

    fn store(&mut self, chunk: Chunk, now: f64) {
        if let Some(existing) = self
            .chunks
            .iter_mut()
            .find(|s| s.chunk.same_content(&chunk))
        {
            trace!(chunk = %existing.chunk, presentations = existing.references.len() + 1, "merged");
            existing.references.push(now);
            return;
        }
        trace!(chunk = %chunk, "stored");
        self.chunks.push(StoredChunk {
            chunk,
            references: vec![now],
        });
    }

    fn snapshot(&self, now: f64) -> Vec<PublicChunk> {
        let mut contents: Vec<PublicChunk> = self
            .chunks
            .iter()
            .map(|s| PublicChunk::of(&s.chunk, self.base_level(s, now)))
            .collect();
        contents.sort_by_key(|c| std::cmp::Reverse(OrderedFloat(c.activation)));
        contents
    }

    fn len(&self) -> usize {
        self.chunks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{FixedNoise, ScriptedNoise};

    fn quiet_store() -> ChunkStore<FixedNoise> {
        ChunkStore::with_noise(MemoryParams::default(), FixedNoise(0.0))
    }

    fn experience(name: &str, agent: &str, opponent: &str, next: &str) -> Chunk {
        Chunk::new(name)
            .with_slot("agent", agent)
            .with_slot("opponent", opponent)
            .with_slot("resulting-opponent", next)
    }

    fn query(agent: &str, opponent: &str) -> Chunk {
        Chunk::new("query")
            .with_slot("agent", agent)
            .with_slot("opponent", opponent)
    }

    #[test]
    fn empty_store_fails_with_threshold_latency() {
        let mut store = quiet_store();
        let result = store.retrieve(&query("coop", "coop"), 1.0);
        assert!(!result.is_hit());
        // F · e^(-τ) with τ = 0
        assert!((result.latency - 0.2).abs() < 1e-12);
    }

    #[test]
    fn identical_content_is_merged() {
        let mut store = quiet_store();
        store.store(experience("instance1", "coop", "coop", "coop"), 0.0);
        store.store(experience("instance2", "coop", "coop", "coop"), 5.0);
        assert_eq!(store.len(), 1);
        assert_eq!(store.reference_count("instance1"), Some(2));
        assert_eq!(store.reference_count("instance2"), None);
    }

    #[test]
    fn only_matching_chunks_are_retrieved() {
        let mut store = quiet_store();
        store.store(experience("a", "coop", "coop", "coop"), 0.0);
        store.store(experience("b", "defect", "coop", "defect"), 0.0);

        let result = store.retrieve(&query("defect", "coop"), 0.5);
        assert_eq!(result.chunk.as_ref().map(Chunk::name), Some("b"));
    }

    #[test]
    fn most_active_match_wins() {
        let mut store = quiet_store();
        store.store(experience("old", "coop", "coop", "defect"), 0.0);
        store.store(experience("fresh", "coop", "coop", "coop"), 9.0);
        store.store(experience("fresh2", "coop", "coop", "coop"), 9.5);

        let result = store.retrieve(&query("coop", "coop"), 10.0);
        assert_eq!(result.chunk.as_ref().map(Chunk::name), Some("fresh"));
    }

    #[test]
    fn decayed_chunk_falls_below_threshold() {
        let mut store = quiet_store();
        store.store(experience("a", "coop", "coop", "coop"), 0.0);
        // ln(100^-0.5) ≈ -2.3 < τ = 0
        let result = store.retrieve(&query("coop", "coop"), 100.0);
        assert!(!result.is_hit());
        assert!((result.latency - 0.2).abs() < 1e-12);
    }

    #[test]
    fn noise_can_rescue_a_weak_chunk() {
        let mut store = ChunkStore::with_noise(MemoryParams::default(), ScriptedNoise::new(vec![3.0]));
        store.store(experience("a", "coop", "coop", "coop"), 0.0);
        let result = store.retrieve(&query("coop", "coop"), 100.0);
        assert!(result.is_hit());
        // A = -ln(10) + 3
        let expected = 0.2 * (-(3.0 - 10f64.ln())).exp();
        assert!((result.latency - expected).abs() < 1e-9);
    }

    #[test]
    fn without_base_level_learning_activation_is_zero() {
        let params = MemoryParams {
            base_level_learning: false,
            activation_noise: None,
            ..MemoryParams::default()
        };
        let mut store = ChunkStore::with_noise(params, FixedNoise(5.0));
        store.store(experience("a", "coop", "coop", "coop"), 0.0);
        assert_eq!(store.activation_of("a", 1_000.0), Some(0.0));
        let result = store.retrieve(&query("coop", "coop"), 1_000.0);
        assert!(result.is_hit());
        assert!((result.latency - 0.2).abs() < 1e-12);
    }

    #[test]
    fn snapshot_is_sorted_by_activation() {
        let mut store = quiet_store();
        store.store(experience("old", "coop", "coop", "coop"), 0.0);
        store.store(experience("new", "defect", "defect", "defect"), 9.0);
        let snap = store.snapshot(10.0);
        assert_eq!(snap.len(), 2);
        assert_eq!(snap[0].name, "new");
        assert!(snap[0].activation > snap[1].activation);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut store = quiet_store();
        store.store(experience("a", "coop", "coop", "coop"), 0.0);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.chunks().count(), 0);
    }
}
