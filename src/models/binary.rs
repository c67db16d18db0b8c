//! Binary string rendering shared by masks and addresses.

use super::MAX_LENGTH;

/// Render a value as 32 binary characters, zero padded.
pub(crate) fn to_binary(value: u32) -> String {
    format!("{value:032b}")
}

/// Render a value as four dot-separated binary octets with `gap` inserted
/// at bit position `prefix`.
///
/// Dots are placed after every 8 binary characters; the gap does not count
/// towards the 8. When the gap falls on an octet boundary the dot comes
/// first.
pub(crate) fn to_formatted_binary(value: u32, prefix: u8, gap: &str) -> String {
    let bits = to_binary(value);
    let mut out = String::with_capacity(35 + gap.len());

    for (i, bit) in bits.chars().enumerate() {
        if i > 0 && i % 8 == 0 {
            out.push('.');
        }
        if i == prefix as usize {
            out.push_str(gap);
        }
        out.push(bit);
    }
    if prefix == MAX_LENGTH {
        out.push_str(gap);
    }
    out
}
