//! Network summarization.
//!
//! Finds the smallest single network that spans a list of networks. This is
//! a bounding supernet, not exact CIDR aggregation: the result covers the
//! whole span between the lowest and highest input network and can include
//! addresses that none of the inputs contain. `10.0.0.0/24` and
//! `10.0.255.0/24` summarize to `10.0.0.0/16`.
//!
//! Only network ids are compared, so the span ends at the highest id, not
//! at its broadcast: a single network summarizes to its id as a /32.

use crate::error::{Ipv4Error, Result};
use crate::models::{Mask, Network, MAX_LENGTH};
use itertools::{Itertools, MinMaxResult};

/// Summarize networks into the smallest bounding supernet.
///
/// # Arguments
/// * `networks` - Non-empty list of networks
///
/// # Returns
/// * `Ok(Network)` - The supernet spanning the lowest and highest network id
/// * `Err` - If `networks` is empty
pub fn summarize(networks: &[Network]) -> Result<Network> {
    let (lowest, highest) = match networks.iter().map(|n| n.to_u32()).minmax() {
        MinMaxResult::NoElements => {
            return Err(Ipv4Error::InvalidArgument(
                "cannot summarize an empty list of networks".to_string(),
            ))
        }
        MinMaxResult::OneElement(id) => (id, id),
        MinMaxResult::MinMax(lo, hi) => (lo, hi),
    };

    let mut prefix = MAX_LENGTH;
    let mut mask = Mask::exact(prefix);
    while lowest & mask.subnet_mask_u32() != highest & mask.subnet_mask_u32() {
        prefix -= 1;
        mask = Mask::exact(prefix);
    }

    let supernet = Network::from_u32(lowest, mask);
    log::debug!(
        "summarize({} networks) lowest={} highest={} -> {supernet}",
        networks.len(),
        std::net::Ipv4Addr::from(lowest),
        std::net::Ipv4Addr::from(highest)
    );
    Ok(supernet)
}

/// Parse CIDR literals with [`Network::from_cidr`] and [`summarize`] them.
///
/// # Examples
/// ```
/// use ipv4_toolkit::processing::summarize_cidrs;
/// let net = summarize_cidrs(&["192.168.0.0/24", "192.168.3.0/24"]).unwrap();
/// assert_eq!(net.to_string(), "192.168.0.0/22");
/// ```
pub fn summarize_cidrs<S: AsRef<str>>(cidrs: &[S]) -> Result<Network> {
    let networks = cidrs
        .iter()
        .map(|cidr| Network::from_cidr(cidr.as_ref()))
        .collect::<Result<Vec<Network>>>()?;
    summarize(&networks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(cidr: &str) -> Network {
        Network::from_cidr(cidr).unwrap()
    }

    #[test]
    fn test_summarize_four_class_c() {
        let result = summarize_cidrs(&[
            "192.168.0.0/24",
            "192.168.1.0/24",
            "192.168.2.0/24",
            "192.168.3.0/24",
        ])
        .unwrap();
        assert_eq!(result, net("192.168.0.0/22"));
    }

    #[test]
    fn test_summarize_order_does_not_matter() {
        let networks = vec![net("10.0.3.0/24"), net("10.0.0.0/24"), net("10.0.1.0/24")];
        assert_eq!(summarize(&networks).unwrap(), net("10.0.0.0/22"));
    }

    #[test]
    fn test_summarize_single() {
        assert_eq!(
            summarize(&[net("10.1.2.0/24")]).unwrap(),
            net("10.1.2.0/32")
        );
    }

    #[test]
    fn test_summarize_is_bounding_supernet() {
        // the gap between the inputs is covered as well
        let result = summarize_cidrs(&["10.0.0.0/24", "10.0.255.0/24"]).unwrap();
        assert_eq!(result, net("10.0.0.0/16"));

        let result = summarize_cidrs(&["0.0.0.0/8", "255.0.0.0/8"]).unwrap();
        assert_eq!(result, net("0.0.0.0/0"));
    }

    #[test]
    fn test_summarize_uses_network_ids() {
        // 10.0.1.77/24 is re-aligned to 10.0.1.0 before comparison
        let result = summarize_cidrs(&["10.0.0.0/24", "10.0.1.77/24"]).unwrap();
        assert_eq!(result, net("10.0.0.0/23"));
    }

    #[test]
    fn test_summarize_errors() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            summarize_cidrs(&empty),
            Err(Ipv4Error::InvalidArgument(_))
        ));
        assert!(matches!(
            summarize_cidrs(&["10.0.0.0"]),
            Err(Ipv4Error::InvalidArgument(_))
        ));
        assert!(matches!(
            summarize_cidrs(&["10.0.0.0/24", "10.0.0.300/24"]),
            Err(Ipv4Error::InvalidAddress(_))
        ));
    }
}
