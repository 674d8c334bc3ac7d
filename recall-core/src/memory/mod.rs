//! The declarative-memory contract and its reference implementation.
//!
//! Engines never look inside a store. They build a query [`Chunk`], ask for
//! the best match and a latency, and hand over new experiences for
//! safekeeping. Anything honouring [`DeclarativeMemory`] can sit behind an
//! engine: the ACT-R [`ChunkStore`], a shared handle to one, or a test stub.

pub mod store;

pub use store::ChunkStore;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::chunk::{Chunk, PublicChunk};

/// Outcome of one retrieval request.
#[derive(Debug, Clone, PartialEq)]
pub struct Retrieval {
    /// Simulated seconds the search took. Charged even on failure.
    pub latency: f64,
    /// The retrieved chunk, or `None` if nothing cleared the threshold.
    pub chunk: Option<Chunk>,
}

impl Retrieval {
    /// A successful retrieval.
    #[must_use]
    pub fn hit(latency: f64, chunk: Chunk) -> Self {
        Self {
            latency: latency.max(0.0),
            chunk: Some(chunk),
        }
    }

    /// A failed retrieval that still cost `latency`.
    #[must_use]
    pub fn miss(latency: f64) -> Self {
        Self {
            latency: latency.max(0.0),
            chunk: None,
        }
    }

    /// Whether a chunk was found.
    #[must_use]
    pub fn is_hit(&self) -> bool {
        self.chunk.is_some()
    }
}

/// Content-addressable, activation-weighted memory consumed by decision engines.
///
/// `now` is the caller's simulated clock. A `store` followed by a later
/// `retrieve` on the same memory must observe the stored chunk.
pub trait DeclarativeMemory {
    /// Find the best-matching chunk for `query` by the store's own criteria.
    fn retrieve(&mut self, query: &Chunk, now: f64) -> Retrieval;

    /// Add `chunk` to memory. Must not fail.
    fn store(&mut self, chunk: Chunk, now: f64);

    /// Display snapshot of the contents. Stores that cannot enumerate
    /// themselves return nothing.
    fn snapshot(&self, _now: f64) -> Vec<PublicChunk> {
        Vec::new()
    }

    /// Number of distinct chunks held.
    fn len(&self) -> usize;

    /// Whether the memory holds no chunks.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Several engines may share one memory behind a mutex.
impl<M: DeclarativeMemory> DeclarativeMemory for Arc<Mutex<M>> {
    fn retrieve(&mut self, query: &Chunk, now: f64) -> Retrieval {
        self.lock().retrieve(query, now)
    }

    fn store(&mut self, chunk: Chunk, now: f64) {
        self.lock().store(chunk, now);
    }

    fn snapshot(&self, now: f64) -> Vec<PublicChunk> {
        self.lock().snapshot(now)
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}

impl<M: DeclarativeMemory + ?Sized> DeclarativeMemory for Box<M> {
    fn retrieve(&mut self, query: &Chunk, now: f64) -> Retrieval {
        (**self).retrieve(query, now)
    }

    fn store(&mut self, chunk: Chunk, now: f64) {
        (**self).store(chunk, now);
    }

    fn snapshot(&self, now: f64) -> Vec<PublicChunk> {
        (**self).snapshot(now)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
