//! Qtum node RPC abstraction layer.
//!
//! Defines the [`QtumRpc`] trait and provides an HTTP JSON-RPC
//! implementation ([`HttpRpcClient`]) plus a test mock (`mock::MockRpc`).

mod http_adapter;
#[cfg(test)]
pub mod mock;
pub mod types;

pub use http_adapter::HttpRpcClient;
pub use types::{ChainInfo, DecodedRawTransaction, TransactionReceipt};

use async_trait::async_trait;

use crate::error::CoreError;

pub const METHOD_GET_TRANSACTION: &str = "gettransaction";
pub const METHOD_DECODE_RAW_TRANSACTION: &str = "decoderawtransaction";
pub const METHOD_GET_TRANSACTION_RECEIPT: &str = "gettransactionreceipt";
pub const METHOD_GET_BLOCKCHAIN_INFO: &str = "getblockchaininfo";

/// The Qtum RPC methods the gateway needs.
///
/// Implementations handle authentication, connection management, and
/// response decoding internally, and must be safe to share between
/// concurrent lookups.
#[async_trait]
pub trait QtumRpc: Send + Sync {
    /// Issue an arbitrary call and return its raw `result`.
    async fn call(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<serde_json::Value, CoreError>;

    /// Raw `gettransaction` result for a bare (un-prefixed) txid.
    async fn get_transaction(&self, txid: &str) -> Result<serde_json::Value, CoreError> {
        self.call(METHOD_GET_TRANSACTION, vec![serde_json::json!(txid)])
            .await
    }

    async fn decode_raw_transaction(&self, hex: &str) -> Result<DecodedRawTransaction, CoreError>;

    /// Fetch the execution receipt of a contract transaction.
    /// Returns `None` if the node has no receipt for it yet.
    async fn get_transaction_receipt(
        &self,
        txid: &str,
    ) -> Result<Option<TransactionReceipt>, CoreError>;

    /// Fetch basic chain info (network name, block count).
    async fn get_blockchain_info(&self) -> Result<ChainInfo, CoreError>;
}
