//! IPv4 address with an associated netmask.
//!
//! Provides [`Address`]: a 32-bit value plus a [`Mask`], with arithmetic,
//! classful classification and membership tests against the well-known
//! ranges in [`super::ranges`].

use super::binary;
use super::{ranges, AddressClass, Mask, Network};
use crate::error::{Ipv4Error, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// IPv4 address together with its netmask.
///
/// Equality and ordering compare the address value first, then the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address {
    value: u32,
    mask: Mask,
}

/// Parse a trimmed dotted-decimal literal into its 32-bit value.
pub(crate) fn parse_literal(ip: &str) -> Result<u32> {
    let ip = ip.trim();
    match ip.parse::<Ipv4Addr>() {
        Ok(addr) => Ok(u32::from(addr)),
        Err(_) if ip.contains('/') => Err(Ipv4Error::InvalidAddress(format!(
            "Unexpected '/' found in '{ip}'. Use Address::from_cidr() instead."
        ))),
        Err(_) => Err(Ipv4Error::InvalidAddress(format!(
            "'{ip}' is in an unexpected format."
        ))),
    }
}

impl Address {
    /// Create an [`Address`] from a dotted-decimal literal with a /32 mask.
    ///
    /// # Examples
    /// ```
    /// use ipv4_toolkit::models::Address;
    /// let ip = Address::new(" 192.168.1.1 ").unwrap();
    /// assert_eq!(ip.address(), "192.168.1.1");
    /// assert_eq!(ip.mask().prefix(), 32);
    /// ```
    pub fn new(ip: &str) -> Result<Address> {
        Address::with_mask(ip, Mask::default())
    }

    /// Create an [`Address`] from a literal and an explicit mask.
    pub fn with_mask(ip: &str, mask: Mask) -> Result<Address> {
        Ok(Address {
            value: parse_literal(ip)?,
            mask,
        })
    }

    /// Create an [`Address`] whose mask is the default of its class.
    ///
    /// Class D and E addresses have no default and get /32.
    pub fn classful(ip: &str) -> Result<Address> {
        let value = parse_literal(ip)?;
        let mask = Mask::from_class_default(AddressClass::of(value)).unwrap_or_default();
        Ok(Address { value, mask })
    }

    /// Create an [`Address`] from `"ip"` or `"ip/mask"`, the mask in any
    /// form accepted by [`Mask`]'s `FromStr`.
    pub fn from_cidr(ip_cidr: &str) -> Result<Address> {
        match ip_cidr.split_once('/') {
            None => Address::new(ip_cidr),
            Some((_, mask)) if mask.contains('/') => Err(Ipv4Error::InvalidMask(format!(
                "'{mask}' must be either a prefix length from 0 to 32 or a valid subnet mask or a valid host mask."
            ))),
            Some((ip, mask)) => Address::with_mask(ip, mask.parse()?),
        }
    }

    /// Create an [`Address`] from a raw value.
    pub fn from_u32(value: u32, mask: Mask) -> Address {
        Address { value, mask }
    }

    /// Canonical dotted-decimal string.
    pub fn address(&self) -> String {
        self.ip().to_string()
    }

    /// The address as [`Ipv4Addr`].
    pub fn ip(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.value)
    }

    pub fn to_u32(&self) -> u32 {
        self.value
    }

    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// IP version, always 4.
    pub fn version(&self) -> u8 {
        4
    }

    /// The network containing this address under its own mask.
    pub fn network(&self) -> Network {
        Network::from_address(self)
    }

    /// Host part of the address (`value & host mask`), dotted.
    pub fn host_id(&self) -> String {
        Ipv4Addr::from(self.value & self.mask.host_mask_u32()).to_string()
    }

    /// Add `increment` to the address, keeping the mask.
    ///
    /// # Errors
    /// [`Ipv4Error::AddressRange`] if the result leaves the IPv4 space.
    pub fn add(&self, increment: i64) -> Result<Address> {
        let next = self.value as i128 + increment as i128;
        let ip = self.address();

        if next > u32::MAX as i128 {
            Err(Ipv4Error::AddressRange(format!(
                "'{ip}' + {increment} is greater than '255.255.255.255'"
            )))
        } else if next < 0 {
            Err(Ipv4Error::AddressRange(format!(
                "'{ip}' + {increment} is less than '0.0.0.0'"
            )))
        } else {
            Ok(Address::from_u32(next as u32, self.mask))
        }
    }

    /// Subtract `decrement` from the address, keeping the mask.
    ///
    /// # Errors
    /// [`Ipv4Error::AddressRange`] if the result leaves the IPv4 space.
    pub fn subtract(&self, decrement: i64) -> Result<Address> {
        let next = self.value as i128 - decrement as i128;
        let ip = self.address();

        if next < 0 {
            Err(Ipv4Error::AddressRange(format!(
                "'{ip}' - {decrement} is less than '0.0.0.0'"
            )))
        } else if next > u32::MAX as i128 {
            Err(Ipv4Error::AddressRange(format!(
                "'{ip}' - {decrement} is greater than '255.255.255.255'"
            )))
        } else {
            Ok(Address::from_u32(next as u32, self.mask))
        }
    }

    /// True for `0.0.0.0`.
    pub fn is_unspecified(&self) -> bool {
        self.value == 0
    }

    /// 32 binary characters, zero padded.
    pub fn to_binary(&self) -> String {
        binary::to_binary(self.value)
    }

    /// Dotted binary octets with an optional `gap` between network and host bits.
    ///
    /// # Examples
    /// ```
    /// use ipv4_toolkit::models::Address;
    /// let ip = Address::from_cidr("192.168.0.1/24").unwrap();
    /// assert_eq!(
    ///     ip.to_formatted_binary(Some(" ")),
    ///     "11000000.10101000.00000000. 00000001"
    /// );
    /// ```
    pub fn to_formatted_binary(&self, gap: Option<&str>) -> String {
        binary::to_formatted_binary(self.value, self.mask.prefix(), gap.unwrap_or(""))
    }

    /// Classful address class.
    pub fn class(&self) -> AddressClass {
        AddressClass::of(self.value)
    }

    pub fn is_loopback(&self) -> bool {
        ranges::loopback_network().contains(self)
    }

    pub fn is_link_local(&self) -> bool {
        ranges::link_local_network().contains(self)
    }

    /// Automatic Private IP Addressing, same range as link-local.
    pub fn is_apipa(&self) -> bool {
        self.is_link_local()
    }

    pub fn is_multicast(&self) -> bool {
        ranges::multicast_network().contains(self)
    }

    /// In the class E range 240.0.0.0/4 (includes 255.255.255.255).
    pub fn is_reserved(&self) -> bool {
        ranges::reserved_network().contains(self)
    }

    /// In any of the IANA special-purpose networks.
    pub fn is_private(&self) -> bool {
        ranges::private_networks()
            .iter()
            .any(|net| net.contains(self))
    }

    pub fn is_public(&self) -> bool {
        !self.is_private()
    }

    /// Same as [`Address::is_public`].
    pub fn is_global(&self) -> bool {
        self.is_public()
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Address {
        Address::from_u32(u32::from(ip), Mask::default())
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::from_cidr(&s).map_err(de::Error::custom)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.ip(), self.mask)
    }
}
