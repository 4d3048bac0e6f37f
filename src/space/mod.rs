//! IPv4 address space on top of the bit trie
//!
//! Subdivides a fixed base block (e.g. `10.0.0.0/8`). Only the bits
//! between the end of the base and the end of a prefix are stored in the
//! trie, so every key is relative to the base.

use crate::config::SpaceConfig;
use crate::trie::{BitTrie, Item};
use crate::{Error, Result};
use ipnet::{IpNet, Ipv4Net};
use std::net::Ipv4Addr;
use std::str::FromStr;
use tracing::trace;

/// Width of an IPv4 address
pub const IPV4_BITS: u8 = 32;

/// A set of non-overlapping prefixes carved out of one IPv4 base block
#[derive(Clone, Debug)]
pub struct AddressSpace {
    /// Always truncated to its own prefix length
    base: Ipv4Net,
    trie: BitTrie,
}

impl AddressSpace {
    /// Create an empty address space; host bits of `base` are dropped
    pub fn new(base: Ipv4Net) -> Self {
        Self::from_config(&SpaceConfig::new(base))
    }

    pub fn from_config(config: &SpaceConfig) -> Self {
        AddressSpace {
            base: config.base.trunc(),
            trie: BitTrie::with_config(config.trie),
        }
    }

    /// Create from a prefix of either family, rejecting IPv6
    pub fn from_net(base: IpNet) -> Result<Self> {
        match base {
            IpNet::V4(net) => Ok(Self::new(net)),
            IpNet::V6(net) => Err(Error::NotIpv4(net.to_string())),
        }
    }

    pub fn base(&self) -> Ipv4Net {
        self.base
    }

    /// Number of stored prefixes, including ones hidden by a permissive
    /// supernet
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Check if `prefix` nests inside the base block
    pub fn contains(&self, prefix: Ipv4Net) -> bool {
        self.base.contains(&prefix.trunc())
    }

    /// Trie key of `prefix`: the bits following the base
    ///
    /// Host bits of `prefix` are ignored. Returns `None` if the prefix does
    /// not nest inside the base.
    pub fn key_of(&self, prefix: Ipv4Net) -> Option<Item> {
        let prefix = prefix.trunc();
        if !self.base.contains(&prefix) {
            return None;
        }

        let len = prefix.prefix_len() - self.base.prefix_len();
        let addr = u64::from(u32::from(prefix.network()));
        let value = (addr >> (IPV4_BITS - prefix.prefix_len())) & ((1u64 << len) - 1);
        Some(Item::new(value, len))
    }

    /// Absolute prefix for a trie key
    ///
    /// Returns `None` if the key is longer than the space below the base.
    pub fn prefix_from(&self, item: Item) -> Option<Ipv4Net> {
        let len = self.base.prefix_len().checked_add(item.len)?;
        if len > IPV4_BITS {
            return None;
        }

        let mut addr = u32::from(self.base.network());
        if item.len > 0 {
            let mask = (1u64 << item.len) - 1;
            addr |= ((item.value & mask) as u32) << (IPV4_BITS - len);
        }
        Ipv4Net::new(Ipv4Addr::from(addr), len).ok()
    }

    /// Store `prefix`
    ///
    /// Returns false if it lies outside the base or overlaps a stored
    /// prefix (see [`BitTrie::insert`]).
    pub fn insert(&mut self, prefix: Ipv4Net) -> bool {
        match self.key_of(prefix) {
            Some(key) => self.trie.insert(key.value, key.len),
            None => {
                trace!(%prefix, base = %self.base, "insert rejected: outside base");
                false
            }
        }
    }

    /// Check if exactly `prefix` is stored
    pub fn search(&self, prefix: Ipv4Net) -> bool {
        self.key_of(prefix)
            .is_some_and(|key| self.trie.search(key.value, key.len))
    }

    /// Reserve the lowest free prefix of length `prefix_len`
    ///
    /// Returns `None` when `prefix_len` is not longer than the base, exceeds
    /// [`IPV4_BITS`], or no block of that size is left.
    pub fn allocate(&mut self, prefix_len: u8) -> Option<Ipv4Net> {
        if prefix_len > IPV4_BITS {
            return None;
        }
        let len = prefix_len.checked_sub(self.base.prefix_len())?;
        let item = self.trie.allocate(len)?;
        self.prefix_from(item)
    }

    /// All stored prefixes in ascending address order
    pub fn enumerate(&self) -> Vec<Ipv4Net> {
        self.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = Ipv4Net> + '_ {
        self.trie.iter().filter_map(move |item| self.prefix_from(item))
    }
}

impl FromStr for AddressSpace {
    type Err = Error;

    /// Parse a CIDR base such as `"192.168.0.0/16"`
    fn from_str(s: &str) -> Result<Self> {
        let net: IpNet = s.parse()?;
        Self::from_net(net)
    }
}
