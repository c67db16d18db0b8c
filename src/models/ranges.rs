//! Well-known IPv4 ranges.
//!
//! Built once on first use and never mutated.

use super::{AddressClass, Mask, Network};
use lazy_static::lazy_static;
use std::net::Ipv4Addr;

fn network(a: u8, b: u8, c: u8, d: u8, prefix: u8) -> Network {
    Network::from_u32(u32::from(Ipv4Addr::new(a, b, c, d)), Mask::exact(prefix))
}

lazy_static! {
    static ref LOOPBACK: Network = network(127, 0, 0, 0, 8);
    static ref LINK_LOCAL: Network = network(169, 254, 0, 0, 16);
    static ref CLASS_NETWORKS: [Network; 5] = [
        network(0, 0, 0, 0, 1),
        network(128, 0, 0, 0, 2),
        network(192, 0, 0, 0, 3),
        network(224, 0, 0, 0, 4),
        network(240, 0, 0, 0, 4),
    ];
    /// IANA special-purpose networks.
    static ref PRIVATE_NETWORKS: Vec<Network> = vec![
        network(0, 0, 0, 0, 8),
        network(10, 0, 0, 0, 8),
        network(127, 0, 0, 0, 8),
        network(169, 254, 0, 0, 16),
        network(172, 16, 0, 0, 12),
        network(192, 0, 0, 0, 29),
        network(192, 0, 0, 170, 31),
        network(192, 0, 2, 0, 24),
        network(192, 168, 0, 0, 16),
        network(198, 18, 0, 0, 15),
        network(198, 51, 100, 0, 24),
        network(203, 0, 113, 0, 24),
        // includes 255.255.255.255
        network(240, 0, 0, 0, 4),
    ];
}

/// 127.0.0.0/8
pub fn loopback_network() -> Network {
    *LOOPBACK
}

/// 169.254.0.0/16
pub fn link_local_network() -> Network {
    *LINK_LOCAL
}

/// Same as [`link_local_network`].
pub fn apipa_network() -> Network {
    link_local_network()
}

/// Class D, 224.0.0.0/4.
pub fn multicast_network() -> Network {
    class_network(AddressClass::D)
}

/// Class E, 240.0.0.0/4.
pub fn reserved_network() -> Network {
    class_network(AddressClass::E)
}

/// The whole range of an address class, e.g. `128.0.0.0/2` for class B.
pub fn class_network(class: AddressClass) -> Network {
    let index = match class {
        AddressClass::A => 0,
        AddressClass::B => 1,
        AddressClass::C => 2,
        AddressClass::D => 3,
        AddressClass::E => 4,
    };
    CLASS_NETWORKS[index]
}

pub fn private_networks() -> &'static [Network] {
    &PRIVATE_NETWORKS
}
