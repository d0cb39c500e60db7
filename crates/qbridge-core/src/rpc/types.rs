//! Typed results of the Qtum RPC methods the gateway consumes.
//!
//! `gettransaction` results stay as raw JSON (see
//! [`crate::transformer::get_transaction`]); everything else is deserialized
//! into the structures below.

use serde::{Deserialize, Serialize};

// ==============================================================================
// Chain Info
// ==============================================================================

/// Basic chain information from `getblockchaininfo`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainInfo {
    pub chain: String,
    pub blocks: u64,
    #[serde(rename = "bestblockhash")]
    pub best_block_hash: String,
}

// ==============================================================================
// Decoded Raw Transaction
// ==============================================================================

/// Result of `decoderawtransaction`. Only the fields the gateway reads are
/// kept; output order matches the transaction's `vout` order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodedRawTransaction {
    pub txid: String,
    pub vout: Vec<DecodedOutput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodedOutput {
    pub n: u32,
    #[serde(rename = "scriptPubKey")]
    pub script_pub_key: ScriptPubKey,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptPubKey {
    pub asm: String,
    #[serde(default)]
    pub hex: String,
    #[serde(rename = "type")]
    pub script_type: ScriptType,
}

/// Output script classification as reported by the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptType {
    Pubkey,
    Pubkeyhash,
    Scripthash,
    Multisig,
    Nulldata,
    WitnessV0Keyhash,
    WitnessV0Scripthash,
    WitnessV1Taproot,
    Call,
    Create,
    Nonstandard,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ScriptType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pubkey => write!(f, "pubkey"),
            Self::Pubkeyhash => write!(f, "pubkeyhash"),
            Self::Scripthash => write!(f, "scripthash"),
            Self::Multisig => write!(f, "multisig"),
            Self::Nulldata => write!(f, "nulldata"),
            Self::WitnessV0Keyhash => write!(f, "witness_v0_keyhash"),
            Self::WitnessV0Scripthash => write!(f, "witness_v0_scripthash"),
            Self::WitnessV1Taproot => write!(f, "witness_v1_taproot"),
            Self::Call => write!(f, "call"),
            Self::Create => write!(f, "create"),
            Self::Nonstandard => write!(f, "nonstandard"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

// ==============================================================================
// Transaction Receipt
// ==============================================================================

/// One entry of `gettransactionreceipt`. Addresses are bare 40-digit hex.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub block_hash: String,
    pub block_number: u64,
    pub transaction_hash: String,
    pub transaction_index: u64,
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub contract_address: String,
    #[serde(default)]
    pub gas_used: u64,
    #[serde(default)]
    pub excepted: Option<String>,
}
