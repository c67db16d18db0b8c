//! Classful IPv4 address classes.
//!
//! The class of an address is decided by its leading bits:
//! `0` (A), `10` (B), `110` (C), `1110` (D, multicast), `1111` (E, reserved).

use crate::error::{Ipv4Error, Result};
use std::fmt;
use std::str::FromStr;

/// Legacy classful address class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AddressClass {
    A,
    B,
    C,
    D,
    E,
}

/// Leading-bit patterns as `(class, pattern, pattern length)`, tested in order.
const CLASS_BITS: [(AddressClass, u32, u32); 5] = [
    (AddressClass::A, 0b0, 1),
    (AddressClass::B, 0b10, 2),
    (AddressClass::C, 0b110, 3),
    (AddressClass::D, 0b1110, 4),
    (AddressClass::E, 0b1111, 4),
];

impl AddressClass {
    /// All classes in order.
    pub const ALL: [AddressClass; 5] = [
        AddressClass::A,
        AddressClass::B,
        AddressClass::C,
        AddressClass::D,
        AddressClass::E,
    ];

    /// Class of a 32-bit address value.
    pub fn of(value: u32) -> AddressClass {
        for (class, pattern, len) in CLASS_BITS {
            if value >> (32 - len) == pattern {
                return class;
            }
        }
        // 1111 is the last pattern and covers everything left
        AddressClass::E
    }

    /// Leading bit pattern of the class as a binary string.
    ///
    /// ```
    /// use ipv4_toolkit::models::AddressClass;
    /// assert_eq!(AddressClass::C.bits(), "110");
    /// ```
    pub fn bits(self) -> &'static str {
        match self {
            AddressClass::A => "0",
            AddressClass::B => "10",
            AddressClass::C => "110",
            AddressClass::D => "1110",
            AddressClass::E => "1111",
        }
    }

    /// Default (classful) prefix length. Classes D and E have none.
    pub fn default_prefix(self) -> Result<u8> {
        match self {
            AddressClass::A => Ok(8),
            AddressClass::B => Ok(16),
            AddressClass::C => Ok(24),
            AddressClass::D | AddressClass::E => Err(Ipv4Error::InvalidArgument(format!(
                "'{self}' must be either 'A', 'B', or 'C'. \
                 The other classes 'D' and 'E' do not have default netmasks."
            ))),
        }
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letter = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D",
            AddressClass::E => "E",
        };
        write!(f, "{letter}")
    }
}

impl FromStr for AddressClass {
    type Err = Ipv4Error;

    /// Parse a class letter, case-insensitively.
    fn from_str(s: &str) -> Result<AddressClass> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(AddressClass::A),
            "B" => Ok(AddressClass::B),
            "C" => Ok(AddressClass::C),
            "D" => Ok(AddressClass::D),
            "E" => Ok(AddressClass::E),
            _ => Err(Ipv4Error::InvalidArgument(format!(
                "Invalid class: '{s}' must be either 'A', 'B', 'C', 'D' or 'E'."
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_of_boundaries() {
        assert_eq!(AddressClass::of(0x0000_0000), AddressClass::A);
        assert_eq!(AddressClass::of(0x7FFF_FFFF), AddressClass::A);
        assert_eq!(AddressClass::of(0x8000_0000), AddressClass::B);
        assert_eq!(AddressClass::of(0xBFFF_FFFF), AddressClass::B);
        assert_eq!(AddressClass::of(0xC000_0000), AddressClass::C);
        assert_eq!(AddressClass::of(0xDFFF_FFFF), AddressClass::C);
        assert_eq!(AddressClass::of(0xE000_0000), AddressClass::D);
        assert_eq!(AddressClass::of(0xEFFF_FFFF), AddressClass::D);
        assert_eq!(AddressClass::of(0xF000_0000), AddressClass::E);
        assert_eq!(AddressClass::of(0xFFFF_FFFF), AddressClass::E);
    }

    #[test]
    fn test_class_from_str() {
        assert_eq!("a".parse::<AddressClass>().unwrap(), AddressClass::A);
        assert_eq!("E".parse::<AddressClass>().unwrap(), AddressClass::E);
        let err = "F".parse::<AddressClass>().unwrap_err();
        assert_eq!(
            err,
            Ipv4Error::InvalidArgument(
                "Invalid class: 'F' must be either 'A', 'B', 'C', 'D' or 'E'.".to_string()
            )
        );
    }

    #[test]
    fn test_default_prefix() {
        assert_eq!(AddressClass::A.default_prefix().unwrap(), 8);
        assert_eq!(AddressClass::B.default_prefix().unwrap(), 16);
        assert_eq!(AddressClass::C.default_prefix().unwrap(), 24);
        let err = AddressClass::D.default_prefix().unwrap_err();
        assert!(matches!(err, Ipv4Error::InvalidArgument(_)));
        assert!(err.to_string().starts_with("'D' must be either 'A', 'B', or 'C'."));
        assert!(AddressClass::E.default_prefix().is_err());
    }

    #[test]
    fn test_bits_match_class_of() {
        for class in AddressClass::ALL {
            let bits = class.bits();
            let value = u32::from_str_radix(bits, 2).unwrap() << (32 - bits.len());
            assert_eq!(AddressClass::of(value), class);
        }
    }
}
