//! IPv4 address, netmask and network toolkit.
//!
//! Parse dotted-decimal and CIDR literals, convert between prefix, subnet
//! mask and host mask notation, do exact 32-bit address arithmetic, walk
//! hosts and subnets, and summarize networks into a bounding supernet.
//!
//! ```
//! use ipv4_toolkit::{summarize_cidrs, Address, Network};
//!
//! let ip = Address::from_cidr("192.168.1.77/255.255.255.0").unwrap();
//! assert_eq!(ip.network(), Network::from_cidr("192.168.1.0/24").unwrap());
//! assert!(ip.is_private());
//!
//! let supernet = summarize_cidrs(&["10.0.0.0/24", "10.0.1.0/24"]).unwrap();
//! assert_eq!(supernet.to_string(), "10.0.0.0/23");
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{Ipv4Error, Result};
pub use models::{Address, AddressClass, Mask, Network};
pub use processing::{summarize, summarize_cidrs};
