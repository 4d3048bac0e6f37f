//! Bit trie implementation

use super::item::{Item, MAX_KEY_BITS};
use super::node::Node;
use crate::config::{InsertPolicy, TrieConfig};
use tracing::trace;

/// A binary trie holding a set of non-overlapping bit-string keys
///
/// No stored key is a prefix of another stored key (under the default
/// [`InsertPolicy::Strict`]). Every bit is its own node; there is no path
/// compression.
#[derive(Clone, Debug, Default)]
pub struct BitTrie {
    root: Node,
    config: TrieConfig,
    /// Number of terminal nodes
    len: usize,
}

/// Why a key cannot be placed as-is
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Conflict {
    /// A shorter key covering this one is stored at `depth`
    Covered { depth: u8 },
    /// The exact key is already stored
    Duplicate,
    /// Longer keys below this one are stored
    Covers,
}

impl BitTrie {
    /// Create an empty trie with the strict insert policy
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TrieConfig) -> Self {
        BitTrie {
            root: Node::default(),
            config,
            len: 0,
        }
    }

    pub fn config(&self) -> TrieConfig {
        self.config
    }

    /// Number of terminal keys, including ones hidden by a permissive
    /// supernet
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert the key made of the `len` least significant bits of `value`
    ///
    /// Returns false if the key is wider than [`MAX_KEY_BITS`] or a shorter
    /// stored key already covers it. Under [`InsertPolicy::Strict`] it also
    /// returns false when the key is already stored or would cover a longer
    /// stored key. A rejected insert leaves the trie untouched.
    pub fn insert(&mut self, value: u64, len: u8) -> bool {
        let key = Item::new(value, len);
        if !key.is_valid() {
            trace!(value, len, "insert rejected: key too wide");
            return false;
        }

        match (self.conflict(&key), self.config.insert_policy) {
            (None, _) => {}
            (Some(Conflict::Covered { depth }), _) => {
                trace!(%key, depth, "insert rejected: covered by shorter key");
                return false;
            }
            (Some(Conflict::Duplicate), InsertPolicy::Strict) => {
                trace!(%key, "insert rejected: duplicate");
                return false;
            }
            (Some(Conflict::Duplicate), InsertPolicy::Permissive) => return true,
            (Some(Conflict::Covers), InsertPolicy::Strict) => {
                trace!(%key, "insert rejected: covers longer key");
                return false;
            }
            (Some(Conflict::Covers), InsertPolicy::Permissive) => {}
        }

        let mut node = &mut self.root;
        for depth in 0..len {
            node = node.child_or_insert(key.bit(depth));
        }
        node.terminal = true;
        self.len += 1;
        true
    }

    /// Check if exactly this key is stored
    ///
    /// A key that is only covered by a shorter stored key is not a hit.
    pub fn search(&self, value: u64, len: u8) -> bool {
        let key = Item::new(value, len);
        if !key.is_valid() {
            return false;
        }

        let mut node = &self.root;
        for depth in 0..len {
            match node.child(key.bit(depth)) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.terminal
    }

    /// Reserve the numerically lowest free key of exactly `len` bits
    ///
    /// Returns `None` once every `len`-bit key overlaps a stored key, and
    /// always for `len == 0` or `len > MAX_KEY_BITS`.
    pub fn allocate(&mut self, len: u8) -> Option<Item> {
        if len > MAX_KEY_BITS {
            return None;
        }

        let item = allocate_in(&mut self.root, Item::default(), len);
        match item {
            Some(item) => {
                self.len += 1;
                trace!(%item, len, "allocated");
            }
            None => trace!(len, "allocation failed: no free key"),
        }
        item
    }

    /// All stored keys in preorder, 0-branch before 1-branch
    pub fn enumerate(&self) -> Vec<Item> {
        self.iter().collect()
    }

    /// Iterate over the stored keys in the same order as [`enumerate`](Self::enumerate)
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: vec![(&self.root, Item::default())],
        }
    }

    fn conflict(&self, key: &Item) -> Option<Conflict> {
        let mut node = &self.root;
        for depth in 0..key.len {
            if node.terminal {
                return Some(Conflict::Covered { depth });
            }
            match node.child(key.bit(depth)) {
                Some(child) => node = child,
                None => return None,
            }
        }

        if node.terminal {
            Some(Conflict::Duplicate)
        } else if node.has_children() {
            Some(Conflict::Covers)
        } else {
            None
        }
    }
}

/// Depth-first, 0-branch first search for a free subtree at depth `target`
///
/// `key` is the path from the root to `node`.
fn allocate_in(node: &mut Node, key: Item, target: u8) -> Option<Item> {
    if node.terminal || key.len == target {
        return None;
    }

    for bit in 0..2 {
        let next = Item::new(key.value << 1 | bit as u64, key.len + 1);
        match node.children[bit].as_deref_mut() {
            Some(child) => {
                if let Some(item) = allocate_in(child, next, target) {
                    return Some(item);
                }
            }
            None => {
                // Empty subtree: claim its leftmost key of the requested width.
                let mut child = node.child_or_insert(bit);
                for _ in next.len..target {
                    child = child.child_or_insert(0);
                }
                child.terminal = true;
                return Some(Item::new(next.value << (target - next.len), target));
            }
        }
    }
    None
}

/// Preorder iterator over the keys of a [`BitTrie`]
pub struct Iter<'a> {
    stack: Vec<(&'a Node, Item)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Item;

    fn next(&mut self) -> Option<Item> {
        while let Some((node, key)) = self.stack.pop() {
            if node.terminal {
                // Anything below a terminal node is not reported.
                return Some(key);
            }
            for bit in [1usize, 0] {
                if let Some(child) = node.child(bit) {
                    let value = key.value << 1 | bit as u64;
                    self.stack.push((child, Item::new(value, key.len + 1)));
                }
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a BitTrie {
    type Item = Item;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
