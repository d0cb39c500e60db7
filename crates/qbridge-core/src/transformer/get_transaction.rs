//! `eth_getTransactionByHash` on top of Qtum's `gettransaction`.
//!
//! The node's answer is rebuilt in a fixed sequence of fallible steps:
//!
//! 1. read txid, block hash, raw hex and amount from the lookup result
//! 2. convert the amount to wei
//! 3. `decoderawtransaction` the raw hex
//! 4. pick the first `call`/`create` output and parse its script
//! 5. derive input, gas and gas price from the script
//! 6. fetch the receipt, only for contract transactions
//! 7. derive block position and addresses from the receipt
//! 8. assemble the transaction
//!
//! Any failure aborts the lookup; no partially filled transaction escapes.

use tracing::debug;

use crate::amount;
use crate::error::CoreError;
use crate::hexutil;
use crate::jsonrpc::JsonRpcRequest;
use crate::rpc::types::{DecodedRawTransaction, ScriptType};
use crate::rpc::{QtumRpc, TransactionReceipt, METHOD_GET_TRANSACTION};
use crate::script::{self, ContractInteraction};
use crate::types::EthTransaction;

use super::Continuation;

// ==============================================================================
// Request Rewriting
// ==============================================================================

/// Turn `eth_getTransactionByHash [hash, ...]` into `gettransaction [txid]`.
pub fn rewrite_request(req: &mut JsonRpcRequest) -> Result<Continuation, CoreError> {
    let params = req
        .positional_params()
        .ok_or_else(|| CoreError::InvalidParams("params must be an array".to_owned()))?;
    let first = params
        .first()
        .ok_or_else(|| CoreError::InvalidParams("params must be set".to_owned()))?;
    let hash = first.as_str().ok_or_else(|| {
        CoreError::InvalidParams(format!("transaction hash must be a string, got: {first}"))
    })?;

    let txid = hexutil::remove_hex_prefix(hash).to_owned();
    req.params = serde_json::json!([txid]);
    req.method = METHOD_GET_TRANSACTION.to_owned();

    Ok(Continuation::TransactionByHash)
}

// ==============================================================================
// Response Reconstruction
// ==============================================================================

/// The `gettransaction` fields the gateway depends on.
#[derive(Debug)]
struct LookupRecord {
    txid: String,
    block_hash: String,
    hex: String,
    amount: serde_json::Value,
}

/// Contract-derived fields, already in Ethereum text form.
#[derive(Debug)]
struct ContractFields {
    input: String,
    gas: String,
    gas_price: String,
}

/// Rebuild an Ethereum transaction from a raw `gettransaction` result.
pub async fn reconstruct(
    rpc: &dyn QtumRpc,
    result: serde_json::Value,
) -> Result<EthTransaction, CoreError> {
    let record = read_lookup_record(&result)?;
    let value = amount::native_value_to_hex(&record.amount)?;

    let decoded = rpc.decode_raw_transaction(&record.hex).await?;
    let interaction = find_contract_interaction(&decoded)?;
    let contract = interaction.as_ref().map(contract_fields).transpose()?;

    let receipt = match &interaction {
        Some(_) => rpc.get_transaction_receipt(&record.txid).await?,
        None => None,
    };
    debug!(
        txid = %record.txid,
        contract = interaction.as_ref().map(ContractInteraction::kind),
        receipt = receipt.is_some(),
        "reconstructed transaction"
    );

    Ok(assemble(record, value, contract, receipt))
}

fn read_lookup_record(result: &serde_json::Value) -> Result<LookupRecord, CoreError> {
    let amount = result
        .get("amount")
        .filter(|v| v.is_number() || v.is_string())
        .cloned()
        .ok_or_else(|| CoreError::InvalidTxData("missing amount".into()))?;

    Ok(LookupRecord {
        txid: required_str(result, "txid")?,
        block_hash: required_str(result, "blockhash")?,
        hex: required_str(result, "hex")?,
        amount,
    })
}

fn required_str(result: &serde_json::Value, field: &str) -> Result<String, CoreError> {
    result
        .get(field)
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| CoreError::InvalidTxData(format!("missing {field}")))
}

/// First-match scan over the outputs in `vout` order. The scan stops at the
/// first `call` or `create` output; later outputs are never looked at.
fn find_contract_interaction(
    decoded: &DecodedRawTransaction,
) -> Result<Option<ContractInteraction>, CoreError> {
    for output in &decoded.vout {
        let script = &output.script_pub_key;
        let interaction = match script.script_type {
            ScriptType::Call => script::parse_call(&script.asm)?,
            ScriptType::Create => script::parse_create(&script.asm)?,
            _ => continue,
        };
        debug!(
            vout = output.n,
            script_type = %script.script_type,
            "found contract output"
        );
        return Ok(Some(interaction));
    }
    Ok(None)
}

fn contract_fields(interaction: &ContractInteraction) -> Result<ContractFields, CoreError> {
    Ok(ContractFields {
        input: hexutil::add_hex_prefix(interaction.encoded_call_data()),
        gas: hexutil::encode_big(&interaction.gas_limit()?),
        gas_price: hexutil::encode_big(&interaction.gas_price()?),
    })
}

fn assemble(
    record: LookupRecord,
    value: String,
    contract: Option<ContractFields>,
    receipt: Option<TransactionReceipt>,
) -> EthTransaction {
    let mut tx = EthTransaction {
        hash: hexutil::add_hex_prefix(&record.txid),
        nonce: None,
        block_hash: hexutil::add_hex_prefix(&record.block_hash),
        value,
        ..Default::default()
    };

    if let Some(contract) = contract {
        tx.input = Some(contract.input);
        tx.gas = Some(contract.gas);
        tx.gas_price = Some(contract.gas_price);
    }

    if let Some(receipt) = receipt {
        tx.block_number = Some(hexutil::encode_u64(receipt.block_number));
        tx.transaction_index = Some(hexutil::encode_u64(receipt.transaction_index));
        tx.from = Some(hexutil::add_hex_prefix(&receipt.from));
        tx.to = Some(hexutil::add_hex_prefix(&receipt.contract_address));
    }

    tx
}
