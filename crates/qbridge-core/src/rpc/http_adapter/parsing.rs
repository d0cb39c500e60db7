use serde::de::DeserializeOwned;

use crate::error::{CoreError, RpcError};
use crate::rpc::types::TransactionReceipt;

/// Deserialize a raw `result` into a typed structure, attributing failures
/// to the method that produced it.
pub(super) fn parse_result<T: DeserializeOwned>(
    method: &str,
    raw: serde_json::Value,
) -> Result<T, CoreError> {
    serde_json::from_value(raw).map_err(|e| {
        RpcError::InvalidResponse(format!("invalid {method} result: {e}")).into()
    })
}

/// `gettransactionreceipt` answers with an array that is empty until the
/// transaction has been mined. Only the first entry is relevant.
pub(super) fn parse_receipt_result(
    raw: serde_json::Value,
) -> Result<Option<TransactionReceipt>, CoreError> {
    let entries = match raw {
        serde_json::Value::Null => return Ok(None),
        serde_json::Value::Array(entries) => entries,
        other => {
            return Err(RpcError::InvalidResponse(format!(
                "expected receipt array, got: {other}"
            ))
            .into())
        }
    };

    match entries.into_iter().next() {
        None => Ok(None),
        Some(first) => parse_result("gettransactionreceipt", first).map(Some),
    }
}
