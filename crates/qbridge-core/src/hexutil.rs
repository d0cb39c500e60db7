//! Ethereum-dialect hex text helpers.
//!
//! Quantities are `0x`-prefixed lowercase hex without leading zeros (`0x0`
//! for zero). Data and addresses keep their digits and only gain or lose the
//! `0x` marker.

use alloy_primitives::U256;

const HEX_PREFIX: &str = "0x";

/// Prepend `0x` unless the value already carries it.
pub fn add_hex_prefix(value: &str) -> String {
    if has_hex_prefix(value) {
        value.to_owned()
    } else {
        format!("{HEX_PREFIX}{value}")
    }
}

/// Strip a leading `0x`/`0X`. A value without the marker is returned as is.
pub fn remove_hex_prefix(value: &str) -> &str {
    if has_hex_prefix(value) {
        &value[HEX_PREFIX.len()..]
    } else {
        value
    }
}

fn has_hex_prefix(value: &str) -> bool {
    value.len() >= 2 && value.as_bytes()[..2].eq_ignore_ascii_case(HEX_PREFIX.as_bytes())
}

/// Encode a `u64` as an Ethereum quantity.
pub fn encode_u64(value: u64) -> String {
    format!("{value:#x}")
}

/// Encode a 256-bit integer as an Ethereum quantity.
pub fn encode_big(value: &U256) -> String {
    format!("{value:#x}")
}

/// True when `value` is a non-empty, even-length string of hex digits.
pub fn is_hex_data(value: &str) -> bool {
    !value.is_empty() && value.len() % 2 == 0 && value.bytes().all(|b| b.is_ascii_hexdigit())
}
