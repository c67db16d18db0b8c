//! Integration tests for ipv4-toolkit
//!
//! These tests exercise the public API end to end: parsing, arithmetic,
//! subnetting and summarization.

use ipv4_toolkit::models::ranges;
use ipv4_toolkit::{summarize, summarize_cidrs, Address, AddressClass, Ipv4Error, Mask, Network};

#[test]
fn test_mask_notations_agree() {
    for prefix in 0..=32 {
        let mask = Mask::new(prefix).unwrap();
        let from_text: Mask = format!(" / {prefix} ").parse().unwrap();
        let from_subnet: Mask = mask.subnet_mask().parse().unwrap();
        assert_eq!(from_text, mask);
        assert_eq!(from_subnet, mask);
    }
    assert_eq!(Mask::new(31).unwrap().network_size(), 0);
    assert_eq!(Mask::new(32).unwrap().network_size(), 1);
    assert_eq!(Mask::from_network_size(2_147_483_646).unwrap().prefix(), 1);
    assert!(matches!(
        "0.255.0.255".parse::<Mask>(),
        Err(Ipv4Error::InvalidMask(_))
    ));
}

#[test]
fn test_address_arithmetic_round_trip() {
    let ip = Address::from_cidr("10.20.30.40/16").unwrap();
    for n in [0i64, 1, 255, 65_536, 100_000] {
        assert_eq!(ip.add(n).unwrap().subtract(n).unwrap(), ip);
        assert_eq!(ip.subtract(n).unwrap().add(n).unwrap(), ip);
    }

    let err = Address::new("255.255.255.255").unwrap().add(1).unwrap_err();
    assert!(matches!(err, Ipv4Error::AddressRange(_)));
    assert!(err.to_string().contains("255.255.255.255"));
    assert!(err.to_string().contains(" 1 "));

    let err = Address::new("0.0.0.0").unwrap().subtract(1).unwrap_err();
    assert!(matches!(err, Ipv4Error::AddressRange(_)));
    assert!(err.to_string().contains("'0.0.0.0' - 1"));
}

#[test]
fn test_classification() {
    let ip = Address::new("10.0.0.1").unwrap();
    assert_eq!(ip.class(), AddressClass::A);
    assert!(ip.is_private());

    let lo = Address::new("127.0.0.1").unwrap();
    assert!(lo.is_loopback());
    assert!(lo.is_private());

    let mc = Address::new("224.0.0.1").unwrap();
    assert_eq!(mc.class(), AddressClass::D);
    assert!(mc.is_multicast());
    assert!(ranges::multicast_network().contains(&mc));
}

#[test]
fn test_network_walkthrough() {
    let net = Network::from_cidr("192.168.10.77/26").unwrap();
    assert_eq!(net.to_string(), "192.168.10.64/26");
    assert_eq!(net.host_id(), "0.0.0.0");
    assert_eq!(net.size(), 62);
    assert_eq!(net.broadcast().address(), "192.168.10.127");
    assert_eq!(net.first_ip().unwrap().address(), "192.168.10.65");
    assert_eq!(net.last_ip().unwrap().address(), "192.168.10.126");
    assert_eq!(net.hosts().count(), 62);
    assert_eq!(net.hosts().last().unwrap(), net.last_ip().unwrap());
    assert!(net.contains_literal("192.168.10.100").unwrap());
    assert!(!net.contains_literal("192.168.10.128").unwrap());
}

#[test]
fn test_subnets_partition_parent() {
    let parent = Network::from_cidr("172.16.0.0/20").unwrap();
    let mask = Mask::new(23).unwrap();
    let subnets: Vec<Network> = parent.subnets(mask).unwrap().collect();
    assert_eq!(subnets.len() as u64, parent.subnets_count(mask).unwrap());

    let mut expected_start = parent.to_u32();
    for subnet in &subnets {
        assert_eq!(subnet.to_u32(), expected_start);
        assert!(parent.contains_network(subnet));
        expected_start = subnet.broadcast().to_u32() + 1;
    }
    assert_eq!(expected_start - 1, parent.broadcast().to_u32());

    // the subnets summarize back to the parent
    assert_eq!(summarize(&subnets).unwrap(), parent);
}

#[test]
fn test_summarize_four_contiguous_networks() {
    let supernet = summarize_cidrs(&[
        "192.168.0.0/24",
        "192.168.1.0/24",
        "192.168.2.0/24",
        "192.168.3.0/24",
    ])
    .unwrap();
    assert_eq!(supernet, Network::from_cidr("192.168.0.0/22").unwrap());
}

#[test]
fn test_formatted_binary() {
    let ip = Address::from_cidr("192.168.0.1/24").unwrap();
    assert_eq!(
        ip.to_formatted_binary(Some(" ")),
        "11000000.10101000.00000000. 00000001"
    );
}

#[test]
fn test_values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Mask>();
    assert_send_sync::<Address>();
    assert_send_sync::<Network>();
    assert_send_sync::<Ipv4Error>();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let net = Network::from_cidr(&format!("10.{i}.0.0/16")).unwrap();
                net.is_private()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
