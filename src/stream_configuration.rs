//! Configuration types for eager stream operations

use serde::{Deserialize, Serialize};

use crate::error::{StreamError, StreamResult};

/// Ordering guarantee requested from the sort collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    /// Equal elements keep their relative order
    #[default]
    Stable,
    /// Equal elements may be reordered; avoids the stable sort's scratch buffer
    Unstable,
}

/// Tuning knobs for constructors and ordering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    pub sort_strategy: SortStrategy,
    /// Initial capacity reserved when draining a generator or channel
    pub drain_capacity: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            sort_strategy: SortStrategy::Stable,
            drain_capacity: 16,
        }
    }
}

impl StreamConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sort strategy
    pub fn sort_strategy(mut self, strategy: SortStrategy) -> Self {
        self.sort_strategy = strategy;
        self
    }

    /// Set the initial capacity used by draining constructors
    pub fn drain_capacity(mut self, capacity: usize) -> Self {
        self.drain_capacity = capacity;
        self
    }

    /// Parse a configuration from a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> StreamResult<Self> {
        serde_json::from_str(json).map_err(|e| StreamError::Config(e.to_string()))
    }
}
