//! AddressSpace Integration Tests
//!
//! End-to-end subnetting scenarios through the public API.
//!
//! Run with:
//! ```bash
//! cargo test --test address_space
//! ```

use bittrie::{AddressSpace, InsertPolicy, SpaceConfig};
use ipnet::Ipv4Net;

fn net(s: &str) -> Ipv4Net {
    s.parse().unwrap()
}

fn home_space() -> AddressSpace {
    let mut space: AddressSpace = "192.168.0.0/16".parse().unwrap();
    for prefix in [
        "192.168.42.0/24",
        "192.168.43.0/24",
        "192.168.1.128/25",
        "192.168.99.240/28",
    ] {
        assert!(space.insert(net(prefix)), "insert {prefix}");
    }
    space
}

// ============================================================================
// Insert / Enumerate
// ============================================================================

#[test]
fn test_enumerate_returns_inserted_in_address_order() {
    let space = home_space();
    assert_eq!(
        space.enumerate(),
        vec![
            net("192.168.1.128/25"),
            net("192.168.42.0/24"),
            net("192.168.43.0/24"),
            net("192.168.99.240/28"),
        ]
    );
    assert_eq!(space.len(), 4);
}

#[test]
fn test_overlapping_inserts_rejected() {
    let mut space = home_space();
    assert!(!space.insert(net("192.168.42.0/24")), "duplicate");
    assert!(!space.insert(net("192.168.42.64/26")), "subnet of stored");
    assert!(!space.insert(net("192.168.42.0/23")), "supernet of stored");
    assert!(!space.insert(net("192.168.0.0/16")), "whole base");
    assert_eq!(space.len(), 4);
}

#[test]
fn test_permissive_space_allows_duplicates() {
    let mut config = SpaceConfig::new(net("10.0.0.0/8"));
    config.trie.insert_policy = InsertPolicy::Permissive;
    let mut space = AddressSpace::from_config(&config);

    assert!(space.insert(net("10.1.0.0/16")));
    assert!(space.insert(net("10.1.0.0/16")));
    assert!(space.insert(net("10.0.0.0/15")));
    assert_eq!(space.enumerate(), vec![net("10.0.0.0/15")]);
    assert!(space.search(net("10.1.0.0/16")));
}

// ============================================================================
// Allocation
// ============================================================================

#[test]
fn test_allocate_lowest_free_block() {
    let mut space = home_space();
    assert_eq!(space.allocate(24), Some(net("192.168.0.0/24")));
    assert!(space.search(net("192.168.0.0/24")));
}

#[test]
fn test_allocate_mixed_sizes() {
    let mut space = home_space();
    // 192.168.0.0/20 holds 1.128/25, so the first free /20 is the next one
    assert_eq!(space.allocate(20), Some(net("192.168.16.0/20")));
    assert_eq!(space.allocate(21), Some(net("192.168.8.0/21")));
    assert_eq!(space.allocate(25), Some(net("192.168.0.0/25")));
    assert_eq!(space.allocate(25), Some(net("192.168.0.128/25")));
    assert_eq!(space.allocate(25), Some(net("192.168.1.0/25")));
    assert_eq!(space.allocate(25), Some(net("192.168.2.0/25")));
}

#[test]
fn test_allocations_never_overlap() {
    let mut space = home_space();
    let mut taken = space.enumerate();
    for prefix_len in 20..30 {
        let got = space.allocate(prefix_len).unwrap();
        assert_eq!(got.prefix_len(), prefix_len);
        for other in &taken {
            assert!(
                !other.contains(&got) && !got.contains(other),
                "{got} overlaps {other}"
            );
        }
        taken.push(got);
    }
    assert_eq!(space.len(), taken.len());
}

#[test]
fn test_allocate_until_exhausted() {
    let mut space: AddressSpace = "10.20.0.0/22".parse().unwrap();
    assert!(space.insert(net("10.20.2.0/24")));

    let got: Vec<Ipv4Net> = std::iter::from_fn(|| space.allocate(24)).collect();
    assert_eq!(
        got,
        vec![net("10.20.0.0/24"), net("10.20.1.0/24"), net("10.20.3.0/24")]
    );
    assert_eq!(space.allocate(26), None);
    assert_eq!(space.allocate(32), None);
}

#[test]
fn test_allocate_rejects_lengths_at_or_above_base() {
    let mut space = home_space();
    assert_eq!(space.allocate(0), None);
    assert_eq!(space.allocate(15), None);
    assert_eq!(space.allocate(16), None);
    assert_eq!(space.len(), 4);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_space_from_json_config() {
    let config: SpaceConfig = serde_json::from_str(r#"{"base": "172.16.9.9/12"}"#).unwrap();
    let mut space = AddressSpace::from_config(&config);
    assert_eq!(space.base(), net("172.16.0.0/12"));
    assert_eq!(space.allocate(16), Some(net("172.16.0.0/16")));
}
