//! IPv4 netmask as a prefix length.
//!
//! A [`Mask`] can be built from a prefix length (`24`, `"/24"`), a dotted
//! subnet mask (`"255.255.255.0"`) or a dotted host mask (`"0.0.0.255"`).

use super::binary;
use super::{AddressClass, MAX_LENGTH};
use crate::error::{Ipv4Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

lazy_static! {
    static ref PREFIX_DIGITS: Regex = Regex::new(r"^[0-9]+$").expect("Invalid Regex?");
    static ref SUBNET_MASK_BITS: Regex = Regex::new(r"^1+0*$").expect("Invalid Regex?");
    static ref HOST_MASK_BITS: Regex = Regex::new(r"^0+1*$").expect("Invalid Regex?");
}

/// Largest value accepted by [`Mask::from_network_size`].
pub const MAX_NETWORK_SIZE: u64 = 4_294_967_294;

/// IPv4 netmask, stored as its prefix length (0-32).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Mask {
    prefix: u8,
}

impl Mask {
    /// Create a mask from a prefix length.
    ///
    /// # Examples
    /// ```
    /// use ipv4_toolkit::models::Mask;
    /// assert_eq!(Mask::new(24).unwrap().subnet_mask(), "255.255.255.0");
    /// assert!(Mask::new(33).is_err());
    /// ```
    pub fn new(prefix: i64) -> Result<Mask> {
        if (0..=MAX_LENGTH as i64).contains(&prefix) {
            Ok(Mask {
                prefix: prefix as u8,
            })
        } else {
            Err(out_of_range(&prefix.to_string()))
        }
    }

    /// Infallible constructor for prefixes known to be in range.
    pub(crate) const fn exact(prefix: u8) -> Mask {
        debug_assert!(prefix <= MAX_LENGTH);
        Mask { prefix }
    }

    /// Default mask of an address class (A=/8, B=/16, C=/24).
    pub fn from_class_default(class: AddressClass) -> Result<Mask> {
        Ok(Mask::exact(class.default_prefix()?))
    }

    /// Smallest network whose usable host count is at least `size`.
    ///
    /// # Arguments
    /// * `size` - Required number of usable hosts, `0..=4294967294`.
    ///
    /// # Returns
    /// The mask with prefix `32 - ceil(log2(size + 2))`.
    pub fn from_network_size(size: u64) -> Result<Mask> {
        if size > MAX_NETWORK_SIZE {
            return Err(Ipv4Error::InvalidArgument(format!(
                "Size value of '{size}' must be from 0 to {MAX_NETWORK_SIZE}, inclusive."
            )));
        }
        // ceil(log2(x)) for x >= 2, in integer arithmetic so that sizes
        // next to a power of two (2^31 - 2) land on the right prefix.
        let needed = size + 2;
        let host_bits = 64 - (needed - 1).leading_zeros();
        Ok(Mask::exact(MAX_LENGTH - host_bits as u8))
    }

    /// Parse a dotted-decimal subnet or host mask given as a 32-bit value.
    fn from_dotted(value: u32, literal: &str) -> Result<Mask> {
        let bits = binary::to_binary(value);

        let prefix = if SUBNET_MASK_BITS.is_match(&bits) {
            value.count_ones()
        } else if value == 0 {
            0
        } else if HOST_MASK_BITS.is_match(&bits) {
            value.count_zeros()
        } else {
            return Err(Ipv4Error::InvalidMask(format!(
                "'{literal}' must be either a valid subnet mask or a valid host mask."
            )));
        };
        log::trace!("Mask::from_dotted({literal}) -> /{prefix}");
        Ok(Mask::exact(prefix as u8))
    }

    /// Prefix length.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Subnet mask as an integer (`prefix` leading ones).
    pub fn subnet_mask_u32(&self) -> u32 {
        if self.prefix == 0 {
            0
        } else {
            u32::MAX << (MAX_LENGTH - self.prefix)
        }
    }

    /// Host mask as an integer (`prefix` leading zeros).
    pub fn host_mask_u32(&self) -> u32 {
        let all_bits = u32::MAX as u64;
        !(all_bits << (MAX_LENGTH - self.prefix)) as u32
    }

    /// Subnet mask in dotted-decimal form, e.g. `255.255.255.0`.
    pub fn subnet_mask(&self) -> String {
        Ipv4Addr::from(self.subnet_mask_u32()).to_string()
    }

    /// Host (wildcard) mask in dotted-decimal form, e.g. `0.0.0.255`.
    pub fn host_mask(&self) -> String {
        Ipv4Addr::from(self.host_mask_u32()).to_string()
    }

    /// Number of usable hosts: `|2^(32 - prefix) - 2|`.
    ///
    /// /31 yields 0 and /32 yields 1.
    pub fn network_size(&self) -> u64 {
        let addresses = 1i64 << (MAX_LENGTH - self.prefix);
        (addresses - 2).unsigned_abs()
    }

    /// Subnet mask as 32 binary characters.
    pub fn to_binary(&self) -> String {
        binary::to_binary(self.subnet_mask_u32())
    }

    /// Subnet mask as dotted binary octets, with `gap` at the prefix boundary.
    pub fn to_formatted_binary(&self, gap: Option<&str>) -> String {
        binary::to_formatted_binary(self.subnet_mask_u32(), self.prefix, gap.unwrap_or(""))
    }
}

fn out_of_range(literal: &str) -> Ipv4Error {
    Ipv4Error::InvalidMask(format!(
        "'{literal}' must be an integer between 0 and 32, inclusive."
    ))
}

impl Default for Mask {
    /// A single-host mask, /32.
    fn default() -> Self {
        Mask::exact(MAX_LENGTH)
    }
}

impl FromStr for Mask {
    type Err = Ipv4Error;

    /// Parse `"24"`, `" / 24 "`, `"255.255.255.0"` or `"0.0.0.255"`.
    fn from_str(s: &str) -> Result<Mask> {
        let cleaned = s.replace('/', " ");
        let cleaned = cleaned.trim();

        if PREFIX_DIGITS.is_match(cleaned) {
            return match cleaned.parse::<i64>() {
                Ok(prefix) if (0..=MAX_LENGTH as i64).contains(&prefix) => {
                    Ok(Mask::exact(prefix as u8))
                }
                _ => Err(out_of_range(s)),
            };
        }

        if let Ok(dotted) = cleaned.parse::<Ipv4Addr>() {
            return Mask::from_dotted(u32::from(dotted), s);
        }

        Err(Ipv4Error::InvalidMask(format!(
            "'{s}' must be either a prefix length from 0 to 32 or a valid subnet mask or a valid host mask."
        )))
    }
}

impl TryFrom<u8> for Mask {
    type Error = Ipv4Error;

    fn try_from(prefix: u8) -> Result<Mask> {
        Mask::new(prefix as i64)
    }
}

impl From<Mask> for u8 {
    fn from(mask: Mask) -> u8 {
        mask.prefix
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.prefix)
    }
}
