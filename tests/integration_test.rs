//! Integration tests for ip-subnet-calc
//!
//! These tests drive the public operations from text input to subnet lists.

use ip_subnet_calc::{
    calculate, parse_and_validate, subnet, subnet_with_limit, summarize, Address, IpVersion,
    SubnetError, ValidationError,
};
use num_bigint::BigUint;
use num_traits::One;

#[test]
fn test_class_c_network() {
    let input = parse_and_validate("192.168.1.1", "255.255.255.0").expect("valid input");
    let result = calculate(&input);

    assert_eq!(result.version(), IpVersion::V4);
    assert_eq!(result.network_address().to_string(), "192.168.1.0");
    assert_eq!(
        result.broadcast_address().map(|a| a.to_string()),
        Some("192.168.1.255".to_string())
    );
    assert_eq!(result.wildcard_mask().to_string(), "0.0.0.255");
    assert_eq!(result.cidr_notation(), "/24");
    assert_eq!(*result.total_addresses(), BigUint::from(256u32));
    assert_eq!(*result.usable_addresses(), BigUint::from(254u32));
    assert_eq!(result.first_usable().to_string(), "192.168.1.1");
    assert_eq!(result.last_usable().to_string(), "192.168.1.254");
}

#[test]
fn test_class_c_split_into_four() {
    let input = parse_and_validate("192.168.1.1", "255.255.255.0").unwrap();
    let result = calculate(&input);
    let partition = subnet(&result, "26").expect("valid subdivision");

    let networks: Vec<String> = partition
        .children()
        .iter()
        .map(|c| c.network_address().to_string())
        .collect();
    assert_eq!(
        networks,
        vec!["192.168.1.0", "192.168.1.64", "192.168.1.128", "192.168.1.192"]
    );
    assert!(partition
        .children()
        .iter()
        .all(|c| *c.usable_addresses() == BigUint::from(62u32)));
    assert_eq!(partition.parent().to_string(), "192.168.1.0/24");
}

#[test]
fn test_ipv6_slash_48() {
    let input = parse_and_validate("2001:0db8:85a3::8a2e:0370:7334", "48").unwrap();
    let result = calculate(&input);

    assert_eq!(result.version(), IpVersion::V6);
    assert_eq!(result.network_address().to_string(), "2001:db8:85a3::");
    assert_eq!(*result.total_addresses(), BigUint::one() << 80usize);
    assert_eq!(
        result.original_input_address().to_string(),
        "2001:db8:85a3::8a2e:370:7334"
    );
    assert!(result.broadcast_address().is_none());
}

#[test]
fn test_non_contiguous_mask() {
    assert!(matches!(
        parse_and_validate("192.168.1.1", "255.255.0.255"),
        Err(ValidationError::InvalidMask(_))
    ));
}

#[test]
fn test_shorter_prefix_rejected() {
    let result = calculate(&parse_and_validate("10.1.1.0", "24").unwrap());
    assert_eq!(
        subnet(&result, "20").unwrap_err(),
        SubnetError::PrefixNotLonger {
            current: 24,
            requested: 20
        }
    );
}

#[test]
fn test_total_addresses_every_prefix() {
    for p in 0..=32u32 {
        let result = calculate(&parse_and_validate("10.20.30.40", &p.to_string()).unwrap());
        assert_eq!(*result.total_addresses(), BigUint::one() << (32 - p) as usize);
    }
    for p in 0..=128u32 {
        let result = calculate(&parse_and_validate("2001:db8::abcd", &p.to_string()).unwrap());
        assert_eq!(*result.total_addresses(), BigUint::one() << (128 - p) as usize);
    }
}

#[test]
fn test_v6_compression_round_trip() {
    for text in [
        "::",
        "::1",
        "1::",
        "2001:db8::",
        "2001:db8:0:0:1:0:0:1",
        "fe80::1:2:3:4",
        "0:0:1::",
        "2001:db8:85a3:0:0:8a2e:370:7334",
        "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",
    ] {
        let addr: Address = text.parse().unwrap();
        let compressed = addr.to_string();
        let back: Address = compressed.parse().unwrap();
        assert_eq!(back.to_bits(), addr.to_bits(), "{text} -> {compressed}");
        let exploded: Address = addr.exploded().parse().unwrap();
        assert_eq!(exploded, addr);
    }
}

#[test]
fn test_point_to_point_and_host_route() {
    let r31 = calculate(&parse_and_validate("192.0.2.9", "31").unwrap());
    assert_eq!(*r31.usable_addresses(), BigUint::from(2u32));
    assert_eq!(r31.first_usable(), r31.network_address());
    assert_eq!(Some(r31.last_usable()), r31.broadcast_address());

    let r32 = calculate(&parse_and_validate("192.0.2.9", "255.255.255.255").unwrap());
    assert_eq!(*r32.usable_addresses(), BigUint::one());
    assert_eq!(r32.first_usable(), r32.last_usable());
}

#[test]
fn test_partition_union_is_parent() {
    let result = calculate(&parse_and_validate("10.128.0.0", "255.192.0.0").unwrap());
    let partition = subnet(&result, "/14").unwrap();
    let children = partition.children();

    assert_eq!(children.len(), 1 << (14 - 10));
    assert_eq!(children[0].network_address(), result.network_address());
    assert_eq!(
        children[children.len() - 1].last_address(),
        result.last_address()
    );
    for pair in children.windows(2) {
        assert_eq!(
            pair[0].last_address().to_bits() + 1,
            pair[1].network_address().to_bits()
        );
    }
}

#[test]
fn test_large_v6_split_is_summarized_not_listed() {
    let result = calculate(&parse_and_validate("2001:db8::", "32").unwrap());
    match subnet(&result, "64") {
        Err(SubnetError::TooManySubnets { count, limit }) => {
            assert_eq!(count, BigUint::from(1u64 << 32));
            assert_eq!(limit, 65_536);
        }
        other => panic!("expected TooManySubnets, got {other:?}"),
    }
    let summary = summarize(&result, "64").unwrap();
    assert_eq!(*summary.subnet_count(), BigUint::from(1u64 << 32));
    assert_eq!(summary.first_subnet().to_string(), "2001:db8::/64");

    let partition = subnet_with_limit(&result, "48", 1 << 16).unwrap();
    assert_eq!(partition.len(), 1 << 16);
    assert_eq!(
        partition.children()[1].network_address().to_string(),
        "2001:db8:1::"
    );
}

#[test]
fn test_version_mismatch_and_bad_prefix_text() {
    assert!(matches!(
        parse_and_validate("fe80::1", "255.255.0.0"),
        Err(ValidationError::VersionMismatch { .. })
    ));
    let result = calculate(&parse_and_validate("10.0.0.0", "8").unwrap());
    assert!(matches!(
        subnet(&result, "sixteen"),
        Err(SubnetError::InvalidPrefix(_))
    ));
    assert!(matches!(
        subnet(&result, "40"),
        Err(SubnetError::PrefixOutOfRange { requested: 40, max: 32 })
    ));
}

#[test]
fn test_results_are_independent_values() {
    let a = calculate(&parse_and_validate("172.16.4.1", "22").unwrap());
    let b = calculate(&parse_and_validate("172.16.7.200", "255.255.252.0").unwrap());
    // same network, different input addresses
    assert_eq!(a.network(), b.network());
    assert_ne!(a, b);
    assert_eq!(a.clone(), a);
}
