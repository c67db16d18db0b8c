//! IPv4 network: an address aligned to its mask boundary.
//!
//! Every constructor masks the value down to the network id, so a
//! [`Network`] is never a host address. Address capabilities are exposed by
//! delegating to the inner aligned [`Address`].

use super::{Address, AddressClass, Mask, MAX_LENGTH};
use crate::error::{Ipv4Error, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// IPv4 network id plus mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Network {
    id: Address,
}

impl Network {
    /// Create a [`Network`] from a literal and a mask, aligning the value.
    ///
    /// # Examples
    /// ```
    /// use ipv4_toolkit::models::{Mask, Network};
    /// let net = Network::new("192.168.1.1", Mask::new(24).unwrap()).unwrap();
    /// assert_eq!(net.to_string(), "192.168.1.0/24");
    /// ```
    pub fn new(ip: &str, mask: Mask) -> Result<Network> {
        Ok(Network::from_address(&Address::with_mask(ip, mask)?))
    }

    /// Create a [`Network`] from slash notation, e.g. `"10.0.0.0/8"` or
    /// `"10.0.0.0/255.0.0.0"`.
    pub fn from_cidr(ip_cidr: &str) -> Result<Network> {
        if !ip_cidr.contains('/') {
            return Err(Ipv4Error::InvalidArgument(format!(
                "'{ip_cidr}' must use the slash notation to specify the netmask."
            )));
        }
        Ok(Network::from_address(&Address::from_cidr(ip_cidr)?))
    }

    /// Network containing `address` under the address's own mask.
    pub fn from_address(address: &Address) -> Network {
        Network::from_u32(address.to_u32(), address.mask())
    }

    /// Network containing `value` under `mask`.
    pub fn from_u32(value: u32, mask: Mask) -> Network {
        Network {
            id: Address::from_u32(value & mask.subnet_mask_u32(), mask),
        }
    }

    /// This network id re-aligned under another mask.
    pub fn with_mask(&self, mask: Mask) -> Network {
        Network::from_u32(self.to_u32(), mask)
    }

    /// The aligned network id as an [`Address`].
    pub fn as_address(&self) -> Address {
        self.id
    }

    pub fn address(&self) -> String {
        self.id.address()
    }

    pub fn ip(&self) -> Ipv4Addr {
        self.id.ip()
    }

    pub fn to_u32(&self) -> u32 {
        self.id.to_u32()
    }

    pub fn mask(&self) -> Mask {
        self.id.mask()
    }

    pub fn version(&self) -> u8 {
        self.id.version()
    }

    /// Always `"0.0.0.0"`: a network id has no host bits.
    pub fn host_id(&self) -> String {
        Ipv4Addr::UNSPECIFIED.to_string()
    }

    pub fn add(&self, increment: i64) -> Result<Address> {
        self.id.add(increment)
    }

    pub fn subtract(&self, decrement: i64) -> Result<Address> {
        self.id.subtract(decrement)
    }

    pub fn is_unspecified(&self) -> bool {
        self.id.is_unspecified()
    }

    pub fn to_binary(&self) -> String {
        self.id.to_binary()
    }

    pub fn to_formatted_binary(&self, gap: Option<&str>) -> String {
        self.id.to_formatted_binary(gap)
    }

    pub fn class(&self) -> AddressClass {
        self.id.class()
    }

    pub fn is_loopback(&self) -> bool {
        self.id.is_loopback()
    }

    pub fn is_link_local(&self) -> bool {
        self.id.is_link_local()
    }

    pub fn is_apipa(&self) -> bool {
        self.id.is_apipa()
    }

    pub fn is_multicast(&self) -> bool {
        self.id.is_multicast()
    }

    pub fn is_reserved(&self) -> bool {
        self.id.is_reserved()
    }

    pub fn is_private(&self) -> bool {
        self.id.is_private()
    }

    pub fn is_public(&self) -> bool {
        self.id.is_public()
    }

    pub fn is_global(&self) -> bool {
        self.id.is_global()
    }

    /// Number of usable hosts, see [`Mask::network_size`].
    pub fn size(&self) -> u64 {
        self.mask().network_size()
    }

    /// Usable hosts, `id + 1 ..= id + size()`, as a lazy iterator.
    ///
    /// Calling `hosts()` again (or cloning the iterator) restarts the walk.
    pub fn hosts(&self) -> Hosts {
        let first = self.to_u32() as u64 + 1;
        Hosts {
            next: first,
            last: first + self.size() - 1,
            mask: self.mask(),
        }
    }

    /// Broadcast address: the network id with all host bits set.
    pub fn broadcast(&self) -> Address {
        let broadcast_bits = self.to_u32() | !self.mask().subnet_mask_u32();
        Address::from_u32(broadcast_bits, self.mask())
    }

    /// First usable address, `id + 1`.
    pub fn first_ip(&self) -> Result<Address> {
        self.add(1)
    }

    /// Last usable address, `broadcast - 1`.
    pub fn last_ip(&self) -> Result<Address> {
        self.broadcast().subtract(1)
    }

    /// True if `address` masked under this network's mask is this network's id.
    pub fn contains(&self, address: &Address) -> bool {
        self.contains_u32(address.to_u32())
    }

    /// True if the id of `other`, re-masked under this mask, is this id.
    pub fn contains_network(&self, other: &Network) -> bool {
        self.contains_u32(other.to_u32())
    }

    /// Parse `ip` as a plain address literal and test containment.
    pub fn contains_literal(&self, ip: &str) -> Result<bool> {
        Ok(self.contains(&Address::new(ip)?))
    }

    fn contains_u32(&self, value: u32) -> bool {
        value & self.mask().subnet_mask_u32() == self.to_u32()
    }

    /// Number of subnets of size `new_mask` inside this network.
    ///
    /// # Errors
    /// [`Ipv4Error::IllegalOperation`] if `new_mask` is shorter than the current mask.
    pub fn subnets_count(&self, new_mask: Mask) -> Result<u64> {
        let new_prefix = new_mask.prefix();
        let current_prefix = self.mask().prefix();

        if new_prefix < current_prefix {
            return Err(Ipv4Error::IllegalOperation(format!(
                "The new mask '/{new_prefix}' cannot be less than the current mask of '/{current_prefix}' for this operation."
            )));
        }
        Ok(1u64 << (new_prefix - current_prefix))
    }

    /// Split this network into subnets of size `new_mask`, in ascending order.
    pub fn subnets(&self, new_mask: Mask) -> Result<Subnets> {
        let count = self.subnets_count(new_mask)?;
        log::debug!("subnets({self}) -> {count} x /{new_mask}");
        Ok(Subnets {
            base: self.to_u32() as u64,
            step: 1u64 << (MAX_LENGTH - new_mask.prefix()),
            index: 0,
            count,
            mask: new_mask,
        })
    }

    /// Default mask of this network's address class.
    fn class_mask(&self) -> Result<Mask> {
        Mask::from_class_default(self.class())
    }

    /// Number of networks of the current size inside the classful network.
    ///
    /// # Errors
    /// * [`Ipv4Error::InvalidArgument`] for class D and E.
    /// * [`Ipv4Error::IllegalOperation`] if the current mask is shorter than the class default.
    pub fn classful_subnets_count(&self) -> Result<u64> {
        let class_prefix = self.class_mask()?.prefix();
        let current_prefix = self.mask().prefix();

        if current_prefix < class_prefix {
            return Err(Ipv4Error::IllegalOperation(format!(
                "The default mask of '/{class_prefix}' cannot be greater than the current mask of '/{current_prefix}' for this operation."
            )));
        }
        Ok(1u64 << (current_prefix - class_prefix))
    }

    /// The classful network of this id, split at the current mask.
    pub fn classful_subnets(&self) -> Result<Subnets> {
        self.classful_subnets_count()?;
        let class_net = self.with_mask(self.class_mask()?);
        class_net.subnets(self.mask())
    }
}

/// Lazy iterator over the usable hosts of a [`Network`].
#[derive(Debug, Clone)]
pub struct Hosts {
    next: u64,
    last: u64,
    mask: Mask,
}

impl Hosts {
    fn end(&self) -> u64 {
        // a /32 at 255.255.255.255 would step past the address space
        self.last.min(u32::MAX as u64)
    }
}

impl Iterator for Hosts {
    type Item = Address;

    fn next(&mut self) -> Option<Address> {
        if self.next > self.end() {
            return None;
        }
        let host = Address::from_u32(self.next as u32, self.mask);
        self.next += 1;
        Some(host)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end() + 1).saturating_sub(self.next);
        let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

/// Lazy iterator over equally sized subnets of a [`Network`].
#[derive(Debug, Clone)]
pub struct Subnets {
    base: u64,
    step: u64,
    index: u64,
    count: u64,
    mask: Mask,
}

impl Iterator for Subnets {
    type Item = Network;

    fn next(&mut self) -> Option<Network> {
        if self.index >= self.count {
            return None;
        }
        let subnet_bits = self.base + self.index * self.step;
        self.index += 1;
        Some(Network::from_u32(subnet_bits as u32, self.mask))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.count - self.index).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl From<Address> for Network {
    fn from(address: Address) -> Network {
        Network::from_address(&address)
    }
}

impl From<Network> for Address {
    fn from(network: Network) -> Address {
        network.id
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::from_cidr(&s).map_err(de::Error::custom)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
