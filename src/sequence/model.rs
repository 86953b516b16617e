//! Data models for sequence generation.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

use crate::error::FibResult;

/// Default first seed when the caller supplies none.
pub const DEFAULT_START_A: i64 = 0;
/// Default second seed when the caller supplies none.
pub const DEFAULT_START_B: i64 = 1;

// =============================================================================
// BOUNDS
// =============================================================================

/// Inputs to a single generation call.
///
/// Fields are signed so that negative input from a caller can be carried to
/// the generator and rejected there.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Inclusive value ceiling (`n` on the wire).
    pub limit: i64,

    /// First seed, as supplied by the caller (`startx`).
    pub start_a: i64,

    /// Second seed, as supplied by the caller (`starty`).
    pub start_b: i64,
}

impl Bounds {
    /// Creates bounds with the given limit and the canonical seeds.
    pub fn new(limit: i64) -> Self {
        Self {
            limit,
            start_a: DEFAULT_START_A,
            start_b: DEFAULT_START_B,
        }
    }

    /// Builder: Set both seeds.
    pub fn with_seeds(mut self, start_a: i64, start_b: i64) -> Self {
        self.start_a = start_a;
        self.start_b = start_b;
        self
    }

    /// Builder: Set the first seed.
    pub fn with_start_a(mut self, start_a: i64) -> Self {
        self.start_a = start_a;
        self
    }

    /// Builder: Set the second seed.
    pub fn with_start_b(mut self, start_b: i64) -> Self {
        self.start_b = start_b;
        self
    }

    /// Returns true if the seeds are exactly `(0, 1)`.
    pub fn is_canonical(&self) -> bool {
        self.start_a == DEFAULT_START_A && self.start_b == DEFAULT_START_B
    }

    /// Runs the generator on these bounds.
    pub fn generate(&self) -> FibResult<Sequence> {
        super::generate(self.limit, self.start_a, self.start_b)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(0)
    }
}

// =============================================================================
// SEQUENCE
// =============================================================================

/// Which path produced a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Sliced from the pregenerated table.
    Cached,
    /// Extended on demand from custom seeds.
    Computed,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Cached => "cached",
            Strategy::Computed => "computed",
        }
    }
}

/// Generated values in order.
///
/// Serializes as a bare JSON array; the strategy is local metadata only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sequence {
    values: Vec<u64>,

    #[serde(skip)]
    strategy: Strategy,
}

impl Sequence {
    pub(crate) fn new(values: Vec<u64>, strategy: Strategy) -> Self {
        Self { values, strategy }
    }

    /// Which path produced this sequence.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Gets the values as a slice.
    pub fn as_slice(&self) -> &[u64] {
        &self.values
    }

    /// Consumes the sequence, returning its values.
    pub fn into_vec(self) -> Vec<u64> {
        self.values
    }

    /// Serializes the values as a compact JSON array.
    pub fn to_json(&self) -> FibResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Deref for Sequence {
    type Target = [u64];

    fn deref(&self) -> &[u64] {
        &self.values
    }
}

impl From<Sequence> for Vec<u64> {
    fn from(seq: Sequence) -> Self {
        seq.values
    }
}

impl IntoIterator for Sequence {
    type Item = u64;
    type IntoIter = std::vec::IntoIter<u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_defaults() {
        let bounds = Bounds::default();
        assert_eq!(bounds.limit, 0);
        assert_eq!(bounds.start_a, 0);
        assert_eq!(bounds.start_b, 1);
        assert!(bounds.is_canonical());
    }

    #[test]
    fn test_bounds_builder() {
        let bounds = Bounds::new(50).with_seeds(3, 2);
        assert_eq!(bounds, Bounds { limit: 50, start_a: 3, start_b: 2 });
        assert!(!bounds.is_canonical());

        let bounds = Bounds::new(50).with_start_a(4).with_start_b(7);
        assert_eq!((bounds.start_a, bounds.start_b), (4, 7));
    }

    #[test]
    fn test_swapped_canonical_pair_is_not_canonical() {
        assert!(!Bounds::new(10).with_seeds(1, 0).is_canonical());
    }

    #[test]
    fn test_sequence_serializes_as_array() {
        let seq = Sequence::new(vec![2, 3, 5], Strategy::Computed);
        assert_eq!(seq.to_json().unwrap(), "[2,3,5]");
        assert_eq!(serde_json::to_value(&seq).unwrap(), serde_json::json!([2, 3, 5]));
    }

    #[test]
    fn test_sequence_accessors() {
        let seq = Sequence::new(vec![0, 1, 1], Strategy::Cached);
        assert_eq!(seq.strategy(), Strategy::Cached);
        assert_eq!(seq.strategy().as_str(), "cached");
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.as_slice(), &[0, 1, 1]);
        assert_eq!((&seq).into_iter().sum::<u64>(), 2);
        assert_eq!(seq.into_vec(), vec![0, 1, 1]);
    }
}
