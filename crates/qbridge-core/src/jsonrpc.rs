//! Inbound JSON-RPC 2.0 envelopes.

use serde::{Deserialize, Serialize};

/// Standard and Ethereum-specific JSON-RPC error codes.
pub mod codes {
    pub const PARSE_ERROR: i64 = -32700;
    pub const INVALID_REQUEST: i64 = -32600;
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
    pub const INTERNAL_ERROR: i64 = -32603;
    /// Upstream node failure.
    pub const SERVER_ERROR: i64 = -32000;
    pub const RESOURCE_NOT_FOUND: i64 = -32001;
}

/// A client request. The request rewriter mutates `method` and `params` in
/// place before the request is forwarded to the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default = "default_version")]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: serde_json::Value,
    pub method: String,
    /// Any JSON shape is accepted here. Rewriters decide what they support.
    #[serde(default)]
    pub params: serde_json::Value,
}

impl JsonRpcRequest {
    pub fn new(method: &str, params: Vec<serde_json::Value>) -> Self {
        Self {
            jsonrpc: default_version(),
            id: serde_json::json!(1),
            method: method.to_owned(),
            params: serde_json::Value::Array(params),
        }
    }

    /// Positional parameters. Missing params are an empty list; named
    /// (object) or scalar params yield `None`.
    pub fn positional_params(&self) -> Option<&[serde_json::Value]> {
        match &self.params {
            serde_json::Value::Array(params) => Some(params.as_slice()),
            serde_json::Value::Null => Some(&[][..]),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcErrorObject {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcErrorObject>,
}

impl JsonRpcResponse {
    pub fn success(id: serde_json::Value, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: default_version(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: serde_json::Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: default_version(),
            id,
            result: None,
            error: Some(JsonRpcErrorObject {
                code,
                message: message.into(),
            }),
        }
    }
}

fn default_version() -> String {
    "2.0".to_owned()
}
