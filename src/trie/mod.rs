//! Binary trie over variable-length bit strings
//!
//! Keys are `(value, len)` pairs. Stored keys never overlap: no stored key
//! is a prefix of another, so each one owns a whole subtree of the key
//! space. This is what makes the trie usable as a first-fit allocator of
//! aligned power-of-two blocks.

mod item;
mod node;
mod tree;

pub use item::{Item, MAX_KEY_BITS};
pub use tree::{BitTrie, Iter};
