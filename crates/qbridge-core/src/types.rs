//! Target-dialect (Ethereum JSON-RPC) result types.

use serde::{Deserialize, Serialize};

// ==============================================================================
// Transaction
// ==============================================================================

/// Transaction object returned by `eth_getTransactionByHash`.
///
/// Quantities are hex text (`0x2a`), hashes and addresses are `0x`-prefixed.
/// Fields the backend cannot supply stay `None` and serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthTransaction {
    pub hash: String,
    /// Qtum has no account nonce, so this is never populated.
    pub nonce: Option<String>,
    pub block_hash: String,
    pub block_number: Option<String>,
    pub transaction_index: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub value: String,
    pub gas: Option<String>,
    pub gas_price: Option<String>,
    pub input: Option<String>,
}

// ==============================================================================
// Transformer Output
// ==============================================================================

/// A reconstructed result, ready to be placed in a JSON-RPC response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RpcOutput {
    Transaction(Box<EthTransaction>),
}
