//! Trie keys

use serde::{Deserialize, Serialize};
use std::fmt;

/// Widest key the trie can hold; `value` is a `u64`
pub const MAX_KEY_BITS: u8 = 64;

/// A bit-string key: the `len` least significant bits of `value`,
/// read most significant bit first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Item {
    pub value: u64,
    pub len: u8,
}

impl Item {
    pub fn new(value: u64, len: u8) -> Self {
        Item { value, len }
    }

    /// The bit at `depth` (0 = first bit walked), as a child index
    pub(crate) fn bit(&self, depth: u8) -> usize {
        ((self.value >> (self.len - 1 - depth)) & 1) as usize
    }

    /// Check if the key fits in `MAX_KEY_BITS`
    pub fn is_valid(&self) -> bool {
        self.len <= MAX_KEY_BITS
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "<{}-bit key>", self.len);
        }
        for depth in 0..self.len {
            write!(f, "{}", self.bit(depth))?;
        }
        Ok(())
    }
}
