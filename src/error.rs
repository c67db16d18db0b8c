//! Error type shared by every IPv4 operation in the crate.

use thiserror::Error;

/// Errors raised while parsing or operating on IPv4 values.
///
/// Each variant carries the full message, which embeds the offending
/// literal and, where relevant, the bounds or prefixes involved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Ipv4Error {
    /// Malformed dotted-decimal literal, or a CIDR literal given to a plain constructor.
    #[error("{0}")]
    InvalidAddress(String),
    /// Prefix out of range, or a dotted mask that is neither a subnet nor a host mask.
    #[error("{0}")]
    InvalidMask(String),
    /// Address arithmetic left `0.0.0.0..=255.255.255.255`.
    #[error("{0}")]
    AddressRange(String),
    /// Subnetting requested with a less specific mask than the current one.
    #[error("{0}")]
    IllegalOperation(String),
    /// Unknown address class, missing `/` in a CIDR literal, bad size or empty input.
    #[error("{0}")]
    InvalidArgument(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Ipv4Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let err = Ipv4Error::InvalidMask("'33' must be an integer between 0 and 32, inclusive.".into());
        assert_eq!(
            err.to_string(),
            "'33' must be an integer between 0 and 32, inclusive."
        );
    }

    #[test]
    fn test_boxes_into_dyn_error() {
        let err: Box<dyn std::error::Error> =
            Ipv4Error::InvalidArgument("'F' is not a class".into()).into();
        assert_eq!(err.to_string(), "'F' is not a class");
    }
}
