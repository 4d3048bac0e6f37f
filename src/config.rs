//! Configuration for tries and address spaces

use ipnet::Ipv4Net;
use serde::{Deserialize, Serialize};

/// How `insert` treats a key whose landing node is already occupied
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertPolicy {
    /// Reject exact duplicates and keys that would cover an existing key.
    #[default]
    Strict,
    /// Accept both. A duplicate insert succeeds again, and a supernet
    /// inserted after one of its subnets hides the subnet from
    /// enumeration while leaving it searchable.
    Permissive,
}

/// Trie behavior knobs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieConfig {
    #[serde(default)]
    pub insert_policy: InsertPolicy,
}

impl TrieConfig {
    pub fn permissive() -> Self {
        TrieConfig {
            insert_policy: InsertPolicy::Permissive,
        }
    }
}

/// Everything needed to build an [`AddressSpace`](crate::AddressSpace)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceConfig {
    /// The block being subdivided, e.g. `10.0.0.0/8`
    pub base: Ipv4Net,
    #[serde(flatten)]
    pub trie: TrieConfig,
}

impl SpaceConfig {
    pub fn new(base: Ipv4Net) -> Self {
        SpaceConfig {
            base,
            trie: TrieConfig::default(),
        }
    }
}
