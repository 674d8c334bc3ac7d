//! Stub memories shared by the integration tests.

#![allow(dead_code)]

use recall_core::{Chunk, DeclarativeMemory, Retrieval};

/// Never recalls anything; remembers every stored chunk and its time.
#[derive(Debug, Default)]
pub struct Amnesia {
    pub stored: Vec<(Chunk, f64)>,
    pub queries: usize,
}

impl DeclarativeMemory for Amnesia {
    fn retrieve(&mut self, _query: &Chunk, _now: f64) -> Retrieval {
        self.queries += 1;
        Retrieval::miss(0.2)
    }

    fn store(&mut self, chunk: Chunk, now: f64) {
        self.stored.push((chunk, now));
    }

    fn len(&self) -> usize {
        self.stored.len()
    }
}

/// Always recalls the same chunk.
#[derive(Debug)]
pub struct Fixation {
    pub chunk: Chunk,
    pub latency: f64,
    pub stored: usize,
}

impl Fixation {
    pub fn new(chunk: Chunk, latency: f64) -> Self {
        Self {
            chunk,
            latency,
            stored: 0,
        }
    }
}

impl DeclarativeMemory for Fixation {
    fn retrieve(&mut self, _query: &Chunk, _now: f64) -> Retrieval {
        Retrieval::hit(self.latency, self.chunk.clone())
    }

    fn store(&mut self, _chunk: Chunk, _now: f64) {
        self.stored += 1;
    }

    fn len(&self) -> usize {
        self.stored
    }
}
