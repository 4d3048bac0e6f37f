//! # bittrie
//!
//! A binary trie of non-overlapping bit-string prefixes, with first-fit
//! allocation of new prefixes from the free space.
//!
//! bittrie is the building block for address-space management: carving a
//! fixed block (such as an IPv4 CIDR range) into disjoint, aligned
//! sub-blocks, the same way CIDR subnetting does.
//!
//! ## Core Concepts
//!
//! - **BitTrie**: keys are `(value, len)` bit strings; no stored key is a
//!   prefix of another
//! - **AddressSpace**: maps IPv4 prefixes inside a base block onto trie keys
//! - **Allocation**: always the lowest free block of the requested size
//!
//! ## Example
//!
//! ```
//! use bittrie::AddressSpace;
//!
//! let mut space: AddressSpace = "192.168.0.0/16".parse().unwrap();
//! assert!(space.insert("192.168.1.0/24".parse().unwrap()));
//! assert_eq!(space.allocate(24), Some("192.168.0.0/24".parse().unwrap()));
//! assert_eq!(space.allocate(24), Some("192.168.2.0/24".parse().unwrap()));
//! ```
//!
//! Neither type is synchronized; wrap it in a lock to share it across
//! threads.

pub mod config;
pub mod space;
pub mod trie;

mod error;

pub use config::{InsertPolicy, SpaceConfig, TrieConfig};
pub use error::{Error, Result};
pub use space::{AddressSpace, IPV4_BITS};
pub use trie::{BitTrie, Item, MAX_KEY_BITS};
