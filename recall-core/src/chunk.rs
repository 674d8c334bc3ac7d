//! Chunks: the unit of declarative memory.
//!
//! A chunk is a named set of slot/value pairs. Once handed to a memory store
//! it is never modified; reinforcement is tracked by the store, not the chunk.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RecallError, Result};

/// An immutable, labelled record stored in or queried against declarative memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    name: String,
    slots: BTreeMap<String, String>,
}

impl Chunk {
    /// Create an empty chunk with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: BTreeMap::new(),
        }
    }

    /// Builder-style slot assignment.
    #[must_use]
    pub fn with_slot(mut self, slot: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(slot.into(), value.into());
        self
    }

    /// The chunk's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of `slot`, if the chunk carries it.
    #[must_use]
    pub fn slot(&self, slot: &str) -> Option<&str> {
        self.slots.get(slot).map(String::as_str)
    }

    /// All slot/value pairs in slot order.
    pub fn slots(&self) -> impl Iterator<Item = (&str, &str)> {
        self.slots.iter().map(|(s, v)| (s.as_str(), v.as_str()))
    }

    /// Number of slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Whether every slot of `query` is present here with an equal value.
    ///
    /// An empty query matches every chunk.
    #[must_use]
    pub fn matches(&self, query: &Chunk) -> bool {
        query
            .slots
            .iter()
            .all(|(slot, value)| self.slots.get(slot) == Some(value))
    }

    /// Whether both chunks carry exactly the same slot/value pairs, ignoring names.
    #[must_use]
    pub fn same_content(&self, other: &Chunk) -> bool {
        self.slots == other.slots
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", self.name)?;
        for (i, (slot, value)) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{slot} {value}")?;
        }
        write!(f, "}}")
    }
}

/// Display snapshot of a stored chunk, as shown in a "DM contents" list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicChunk {
    /// Chunk name.
    pub name: String,
    /// Slot/value pairs in slot order.
    pub slots: Vec<(String, String)>,
    /// Activation at the time the snapshot was taken.
    pub activation: f64,
}

impl PublicChunk {
    /// Snapshot `chunk` with the given activation.
    #[must_use]
    pub fn of(chunk: &Chunk, activation: f64) -> Self {
        Self {
            name: chunk.name.clone(),
            slots: chunk
                .slots
                .iter()
                .map(|(s, v)| (s.clone(), v.clone()))
                .collect(),
            activation,
        }
    }
}

/// Serialize a memory snapshot to JSON for hosts that render it elsewhere.
///
/// # Errors
/// Returns [`RecallError::Serialization`] if encoding fails.
pub fn snapshot_to_json(snapshot: &[PublicChunk]) -> Result<String> {
    serde_json::to_string_pretty(snapshot).map_err(|e| RecallError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn experience() -> Chunk {
        Chunk::new("instance1")
            .with_slot("agent", "coop")
            .with_slot("opponent", "defect")
            .with_slot("resulting-opponent", "defect")
    }

    #[test]
    fn query_matches_on_subset_of_slots() {
        let query = Chunk::new("query")
            .with_slot("agent", "coop")
            .with_slot("opponent", "defect");
        assert!(experience().matches(&query));

        let other = Chunk::new("query").with_slot("agent", "defect");
        assert!(!experience().matches(&other));
    }

    #[test]
    fn missing_slot_does_not_match() {
        let query = Chunk::new("query").with_slot("round", "3");
        assert!(!experience().matches(&query));
    }

    #[test]
    fn display_lists_slots_in_order() {
        assert_eq!(
            experience().to_string(),
            "instance1{agent coop, opponent defect, resulting-opponent defect}"
        );
    }

    #[test]
    fn same_content_ignores_name() {
        let renamed = Chunk::new("instance9")
            .with_slot("resulting-opponent", "defect")
            .with_slot("opponent", "defect")
            .with_slot("agent", "coop");
        assert!(experience().same_content(&renamed));
        assert_ne!(experience(), renamed);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let snap = vec![PublicChunk::of(&experience(), 0.5)];
        let json = snapshot_to_json(&snap).expect("json");
        assert!(json.contains("instance1"));
        assert!(json.contains("resulting-opponent"));
    }
}
