//! Qtum contract scripts.
//!
//! `decoderawtransaction` renders contract outputs as assembly text rather
//! than structured fields:
//!
//! ```text
//! call:   <vm-version> <gas-limit> <gas-price> <call-data> <contract-address> OP_CALL
//! create: <vm-version> <gas-limit> <gas-price> <bytecode> OP_CREATE
//! ```
//!
//! Small numbers are rendered as decimal. Gas values are kept as text and
//! converted on access so a malformed gas field surfaces as a conversion
//! error rather than a script layout error.

use alloy_primitives::U256;

use crate::error::CoreError;
use crate::hexutil;

const OP_CALL: &str = "OP_CALL";
const OP_CREATE: &str = "OP_CREATE";
const CONTRACT_ADDRESS_HEX_LEN: usize = 40;

// ==============================================================================
// Descriptor
// ==============================================================================

/// A contract interaction embedded in a transaction output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractInteraction {
    /// Invocation of an already deployed contract.
    Call(CallScript),
    /// Deployment of a new contract.
    Create(CreateScript),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallScript {
    pub vm_version: u32,
    gas_limit: String,
    gas_price: String,
    call_data: String,
    pub contract_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateScript {
    pub vm_version: u32,
    gas_limit: String,
    gas_price: String,
    bytecode: String,
}

impl ContractInteraction {
    /// Hex data handed to the contract (ABI call data or deployment
    /// bytecode), without `0x`.
    pub fn encoded_call_data(&self) -> &str {
        match self {
            Self::Call(call) => &call.call_data,
            Self::Create(create) => &create.bytecode,
        }
    }

    pub fn gas_limit(&self) -> Result<U256, CoreError> {
        let (field, raw) = match self {
            Self::Call(call) => ("call gas limit", &call.gas_limit),
            Self::Create(create) => ("create gas limit", &create.gas_limit),
        };
        parse_script_number(field, raw)
    }

    pub fn gas_price(&self) -> Result<U256, CoreError> {
        let (field, raw) = match self {
            Self::Call(call) => ("call gas price", &call.gas_price),
            Self::Create(create) => ("create gas price", &create.gas_price),
        };
        parse_script_number(field, raw)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Call(_) => "call",
            Self::Create(_) => "create",
        }
    }
}

// ==============================================================================
// Parsing
// ==============================================================================

pub fn parse_call(asm: &str) -> Result<ContractInteraction, CoreError> {
    let err = |reason: String| CoreError::ScriptParse {
        kind: "call",
        reason,
    };

    let tokens: Vec<&str> = asm.split_whitespace().collect();
    let &[vm_version, gas_limit, gas_price, call_data, contract_address, opcode] = tokens.as_slice()
    else {
        return Err(err(format!("expected 6 tokens, got {}", tokens.len())));
    };
    if opcode != OP_CALL {
        return Err(err(format!("expected trailing {OP_CALL}, got `{opcode}`")));
    }

    let vm_version = parse_vm_version(vm_version).map_err(err)?;
    if !hexutil::is_hex_data(call_data) {
        return Err(err(format!("call data is not hex: `{call_data}`")));
    }
    if contract_address.len() != CONTRACT_ADDRESS_HEX_LEN || !hexutil::is_hex_data(contract_address)
    {
        return Err(err(format!(
            "contract address must be {CONTRACT_ADDRESS_HEX_LEN} hex digits: `{contract_address}`"
        )));
    }

    Ok(ContractInteraction::Call(CallScript {
        vm_version,
        gas_limit: gas_limit.to_owned(),
        gas_price: gas_price.to_owned(),
        call_data: call_data.to_owned(),
        contract_address: contract_address.to_owned(),
    }))
}

pub fn parse_create(asm: &str) -> Result<ContractInteraction, CoreError> {
    let err = |reason: String| CoreError::ScriptParse {
        kind: "create",
        reason,
    };

    let tokens: Vec<&str> = asm.split_whitespace().collect();
    let &[vm_version, gas_limit, gas_price, bytecode, opcode] = tokens.as_slice() else {
        return Err(err(format!("expected 5 tokens, got {}", tokens.len())));
    };
    if opcode != OP_CREATE {
        return Err(err(format!("expected trailing {OP_CREATE}, got `{opcode}`")));
    }

    let vm_version = parse_vm_version(vm_version).map_err(err)?;
    if !hexutil::is_hex_data(bytecode) {
        return Err(err(format!("bytecode is not hex: `{bytecode}`")));
    }

    Ok(ContractInteraction::Create(CreateScript {
        vm_version,
        gas_limit: gas_limit.to_owned(),
        gas_price: gas_price.to_owned(),
        bytecode: bytecode.to_owned(),
    }))
}

fn parse_vm_version(token: &str) -> Result<u32, String> {
    token
        .parse()
        .map_err(|e| format!("invalid vm version `{token}`: {e}"))
}

fn parse_script_number(field: &str, raw: &str) -> Result<U256, CoreError> {
    U256::from_str_radix(raw, 10)
        .map_err(|e| CoreError::Conversion(format!("invalid {field} `{raw}`: {e}")))
}
