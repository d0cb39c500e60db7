//! Shared test helpers for `qbridge-core` unit tests.
//!
//! Builders for backend fixtures (`gettransaction` results, decoded raw
//! transactions, receipts) and sample contract scripts, so tests across
//! modules share one source of dummy data.

use crate::rpc::types::{DecodedOutput, DecodedRawTransaction, ScriptPubKey, ScriptType};
use crate::rpc::TransactionReceipt;

pub const TXID: &str = "1075db55d416d3ca199f55b6084e2115b9345e16c5cf302fc80e9d5fbf5d48d9";
pub const BLOCK_HASH: &str = "3e6d8e3c4a0a1a4bcdd7e4b6a1c7b8b2c1e5a3f9d8e7c6b5a4f3e2d1c0b9a8f7";
pub const RAW_HEX: &str = "0200000001abcdef";
pub const SENDER: &str = "7926223070547d2d15b2ef5e7383e541c338ffe9";
pub const CONTRACT: &str = "e4ba4d301d4c22d3d4fc6b4c6bc8d3c9f7ef7c5d";

// ==============================================================================
// Scripts
// ==============================================================================

/// A well-formed `OP_CALL` script with gas limit 250000 and gas price 40.
pub fn call_asm() -> String {
    format!("4 250000 40 a9059cbb {CONTRACT} OP_CALL")
}

/// A well-formed `OP_CREATE` script with gas limit 2500000 and gas price 40.
pub fn create_asm() -> String {
    "4 2500000 40 6060604052 OP_CREATE".to_owned()
}

pub fn p2pkh_asm() -> String {
    format!("OP_DUP OP_HASH160 {SENDER} OP_EQUALVERIFY OP_CHECKSIG")
}

// ==============================================================================
// Backend Results
// ==============================================================================

/// Minimal `gettransaction` result carrying the fields the gateway reads.
pub fn gettransaction_result(txid: &str, hex: &str, amount: f64) -> serde_json::Value {
    serde_json::json!({
        "amount": amount,
        "confirmations": 12,
        "blockhash": BLOCK_HASH,
        "blockindex": 1,
        "txid": txid,
        "details": [],
        "hex": hex,
    })
}

/// Decoded transaction whose outputs carry the given type tags and scripts,
/// in order.
pub fn decoded_tx(txid: &str, outputs: Vec<(ScriptType, String)>) -> DecodedRawTransaction {
    DecodedRawTransaction {
        txid: txid.to_owned(),
        vout: outputs
            .into_iter()
            .enumerate()
            .map(|(n, (script_type, asm))| DecodedOutput {
                n: n as u32,
                script_pub_key: ScriptPubKey {
                    asm,
                    hex: String::new(),
                    script_type,
                },
            })
            .collect(),
    }
}

pub fn receipt(block_number: u64, index: u64, from: &str, contract: &str) -> TransactionReceipt {
    TransactionReceipt {
        block_hash: BLOCK_HASH.to_owned(),
        block_number,
        transaction_hash: TXID.to_owned(),
        transaction_index: index,
        from: from.to_owned(),
        to: contract.to_owned(),
        contract_address: contract.to_owned(),
        gas_used: 21_000,
        excepted: Some("None".to_owned()),
    }
}
