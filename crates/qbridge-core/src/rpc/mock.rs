use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{CoreError, RpcError};

use super::types::{ChainInfo, DecodedRawTransaction, TransactionReceipt};
use super::{
    QtumRpc, METHOD_DECODE_RAW_TRANSACTION, METHOD_GET_BLOCKCHAIN_INFO, METHOD_GET_TRANSACTION,
    METHOD_GET_TRANSACTION_RECEIPT,
};

/// A mock Qtum RPC backend for testing. Returns canned data populated via
/// the builder pattern and records every method it was asked to run.
pub struct MockRpc {
    transactions: HashMap<String, serde_json::Value>,
    decoded: HashMap<String, DecodedRawTransaction>,
    receipts: HashMap<String, TransactionReceipt>,
    fail_receipts: bool,
    chain_info: ChainInfo,
    calls: Mutex<Vec<String>>,
}

impl MockRpc {
    pub fn builder() -> MockRpcBuilder {
        MockRpcBuilder {
            transactions: HashMap::new(),
            decoded: HashMap::new(),
            receipts: HashMap::new(),
            fail_receipts: false,
            chain_info: ChainInfo {
                chain: "regtest".into(),
                blocks: 600,
                best_block_hash: "00".repeat(32),
            },
        }
    }

    /// Methods invoked so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }

    fn record(&self, method: &str) {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push(method.to_owned());
    }
}

pub struct MockRpcBuilder {
    transactions: HashMap<String, serde_json::Value>,
    decoded: HashMap<String, DecodedRawTransaction>,
    receipts: HashMap<String, TransactionReceipt>,
    fail_receipts: bool,
    chain_info: ChainInfo,
}

impl MockRpcBuilder {
    /// Register a `gettransaction` result, keyed by its `txid` field.
    pub fn with_transaction(mut self, result: serde_json::Value) -> Self {
        let txid = result
            .get("txid")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_owned();
        self.transactions.insert(txid, result);
        self
    }

    /// Register the `decoderawtransaction` answer for a raw hex.
    pub fn with_decoded(mut self, hex: &str, decoded: DecodedRawTransaction) -> Self {
        self.decoded.insert(hex.to_owned(), decoded);
        self
    }

    pub fn with_receipt(mut self, txid: &str, receipt: TransactionReceipt) -> Self {
        self.receipts.insert(txid.to_owned(), receipt);
        self
    }

    /// Make every `gettransactionreceipt` call fail with a server error.
    pub fn with_failing_receipts(mut self) -> Self {
        self.fail_receipts = true;
        self
    }

    pub fn build(self) -> MockRpc {
        MockRpc {
            transactions: self.transactions,
            decoded: self.decoded,
            receipts: self.receipts,
            fail_receipts: self.fail_receipts,
            chain_info: self.chain_info,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl QtumRpc for MockRpc {
    async fn call(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<serde_json::Value, CoreError> {
        self.record(method);
        if method != METHOD_GET_TRANSACTION {
            return Err(CoreError::Rpc(RpcError::ServerError {
                code: -32601,
                message: "Method not found".into(),
            }));
        }
        let txid = params
            .first()
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default();
        self.transactions
            .get(txid)
            .cloned()
            .ok_or_else(|| CoreError::TxNotFound(txid.to_owned()))
    }

    async fn decode_raw_transaction(&self, hex: &str) -> Result<DecodedRawTransaction, CoreError> {
        self.record(METHOD_DECODE_RAW_TRANSACTION);
        self.decoded
            .get(hex)
            .cloned()
            .ok_or_else(|| CoreError::InvalidRawTransaction("TX decode failed".into()))
    }

    async fn get_transaction_receipt(
        &self,
        txid: &str,
    ) -> Result<Option<TransactionReceipt>, CoreError> {
        self.record(METHOD_GET_TRANSACTION_RECEIPT);
        if self.fail_receipts {
            return Err(CoreError::Rpc(RpcError::ServerError {
                code: -28,
                message: "Loading block index...".into(),
            }));
        }
        Ok(self.receipts.get(txid).cloned())
    }

    async fn get_blockchain_info(&self) -> Result<ChainInfo, CoreError> {
        self.record(METHOD_GET_BLOCKCHAIN_INFO);
        Ok(self.chain_info.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::*;

    #[tokio::test]
    async fn get_transaction_uses_call_and_records_it() {
        let rpc = MockRpc::builder()
            .with_transaction(gettransaction_result(TXID, "0100", 0.5))
            .build();
        let raw = rpc.get_transaction(TXID).await.expect("tx must exist");
        assert_eq!(raw["amount"], serde_json::json!(0.5));
        assert_eq!(rpc.calls(), vec![METHOD_GET_TRANSACTION]);
    }

    #[tokio::test]
    async fn unknown_txid_is_not_found() {
        let rpc = MockRpc::builder().build();
        let err = rpc.get_transaction("ff").await.expect_err("must fail");
        assert!(matches!(err, CoreError::TxNotFound(ref txid) if txid == "ff"));
    }

    #[tokio::test]
    async fn missing_receipt_is_none_not_error() {
        let rpc = MockRpc::builder().build();
        let receipt = rpc.get_transaction_receipt(TXID).await.expect("no error");
        assert!(receipt.is_none());
    }
}
