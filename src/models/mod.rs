//! IPv4 value types.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Mask`] - netmask as a prefix length, parsed from any common notation
//! - [`Address`] - IPv4 address with an associated mask
//! - [`Network`] - address aligned to its network boundary
//! - [`AddressClass`] - legacy classful A-E classification
//! - [`ranges`] - well-known networks (loopback, private, multicast, ...)

mod address;
mod binary;
mod class;
mod mask;
mod network;
pub mod ranges;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

// Re-export public types
pub use address::Address;
pub use class::AddressClass;
pub use mask::{Mask, MAX_NETWORK_SIZE};
pub use network::{Hosts, Network, Subnets};
