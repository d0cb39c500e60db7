//! Conversion between Qtum amounts and Ethereum wei.
//!
//! Qtum amounts have 8 fractional digits (satoshi precision) while Ethereum
//! values are integers of wei (18 fractional digits). Amounts are parsed into
//! an exact satoshi count from their decimal text and only then scaled. The
//! workspace enables `serde_json/arbitrary_precision` so a node's numeric text
//! reaches this module unrounded.

use alloy_primitives::U256;
use bitcoin::{Amount, Denomination};

use crate::error::CoreError;
use crate::hexutil;

/// Wei per satoshi: 10^18 / 10^8.
pub const WEI_PER_SATOSHI: u64 = 10_000_000_000;

/// Convert a Qtum-denominated JSON amount into an Ethereum hex quantity of
/// wei.
pub fn native_value_to_hex(value: &serde_json::Value) -> Result<String, CoreError> {
    let amount = parse_native_amount(value)?;
    Ok(hexutil::encode_big(&amount_to_wei(amount)))
}

/// Parse a float coin amount into an exact satoshi amount.
///
/// Fails on negative, non-finite, or more than 8 fractional digits.
pub fn native_float_to_amount(amount: f64) -> Result<Amount, CoreError> {
    if !amount.is_finite() {
        return Err(CoreError::Conversion(format!(
            "amount must be finite, got {amount}"
        )));
    }
    if amount.is_sign_negative() && amount != 0.0 {
        return Err(CoreError::Conversion(format!(
            "amount must not be negative, got {amount}"
        )));
    }
    Amount::from_float_in(amount.abs(), Denomination::Bitcoin)
        .map_err(|e| CoreError::Conversion(format!("invalid amount `{amount}`: {e}")))
}

/// Parse a coin amount from a JSON value.
///
/// Numbers are parsed from their decimal text, so a node amount keeps every
/// satoshi digit. Only scientific notation (`1e-8`) goes through
/// [`native_float_to_amount`]. Strings are parsed as exact decimals.
pub fn parse_native_amount(value: &serde_json::Value) -> Result<Amount, CoreError> {
    match value {
        serde_json::Value::Number(n) => {
            let text = n.to_string();
            if !text.contains(['e', 'E']) {
                return parse_decimal_amount(&text);
            }
            let parsed = n
                .as_f64()
                .ok_or_else(|| CoreError::Conversion(format!("invalid amount `{value}`")))?;
            native_float_to_amount(parsed)
        }
        serde_json::Value::String(s) => parse_decimal_amount(s),
        _ => Err(CoreError::InvalidTxData(format!(
            "expected numeric amount, got: {value}"
        ))),
    }
}

/// Exact decimal coin text to satoshis. `-0` is zero; any other negative
/// amount is rejected.
fn parse_decimal_amount(text: &str) -> Result<Amount, CoreError> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, text),
    };
    let amount = Amount::from_str_in(digits, Denomination::Bitcoin)
        .map_err(|e| CoreError::Conversion(format!("invalid amount `{text}`: {e}")))?;
    if negative && amount != Amount::ZERO {
        return Err(CoreError::Conversion(format!(
            "amount must not be negative, got {text}"
        )));
    }
    Ok(amount)
}

#[must_use]
pub fn amount_to_wei(amount: Amount) -> U256 {
    U256::from(amount.to_sat()) * U256::from(WEI_PER_SATOSHI)
}

/// Inverse of [`amount_to_wei`]. Fails if `wei` is not a whole number of
/// satoshis or does not fit a satoshi count.
pub fn wei_to_amount(wei: U256) -> Result<Amount, CoreError> {
    let scale = U256::from(WEI_PER_SATOSHI);
    if !(wei % scale).is_zero() {
        return Err(CoreError::Conversion(format!(
            "{wei} wei is not a whole number of satoshis"
        )));
    }
    let sats = u64::try_from(wei / scale)
        .map_err(|_| CoreError::Conversion(format!("{wei} wei exceeds the satoshi range")))?;
    Ok(Amount::from_sat(sats))
}
