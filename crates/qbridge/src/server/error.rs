use qbridge_core::jsonrpc::{codes, JsonRpcResponse};
use qbridge_core::CoreError;

// ==============================================================================
// Error Type
// ==============================================================================

/// A request failure, rendered as a JSON-RPC error object.
#[derive(Debug)]
pub(crate) enum AppError {
    Parse(String),
    InvalidRequest(String),
    MethodNotFound(String),
    InvalidParams(String),
    NotFound(String),
    Upstream(String),
    Internal(String),
}

impl AppError {
    pub(crate) fn code(&self) -> i64 {
        match self {
            Self::Parse(_) => codes::PARSE_ERROR,
            Self::InvalidRequest(_) => codes::INVALID_REQUEST,
            Self::MethodNotFound(_) => codes::METHOD_NOT_FOUND,
            Self::InvalidParams(_) => codes::INVALID_PARAMS,
            Self::NotFound(_) => codes::RESOURCE_NOT_FOUND,
            Self::Upstream(_) => codes::SERVER_ERROR,
            Self::Internal(_) => codes::INTERNAL_ERROR,
        }
    }

    pub(crate) fn into_rpc_response(self, id: serde_json::Value) -> JsonRpcResponse {
        let code = self.code();
        let message = match self {
            Self::Parse(msg)
            | Self::InvalidRequest(msg)
            | Self::MethodNotFound(msg)
            | Self::InvalidParams(msg)
            | Self::NotFound(msg)
            | Self::Upstream(msg)
            | Self::Internal(msg) => msg,
        };
        JsonRpcResponse::failure(id, code, message)
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidParams(_) => Self::InvalidParams(err.to_string()),
            CoreError::MethodNotSupported(method) => {
                Self::MethodNotFound(format!("the method {method} does not exist/is not available"))
            }
            CoreError::TxNotFound(_) => Self::NotFound(err.to_string()),
            CoreError::Rpc(rpc) => Self::Upstream(format!("qtum rpc error: {rpc}")),
            CoreError::InvalidRawTransaction(_) => Self::Upstream(err.to_string()),
            CoreError::InvalidTxData(_)
            | CoreError::Conversion(_)
            | CoreError::ScriptParse { .. }
            | CoreError::Config(_) => Self::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qbridge_core::error::RpcError;

    #[test]
    fn core_errors_map_to_json_rpc_codes() {
        let cases = [
            (CoreError::InvalidParams("params must be set".into()), -32602),
            (CoreError::MethodNotSupported("eth_call".into()), -32601),
            (CoreError::TxNotFound("ab".into()), -32001),
            (CoreError::InvalidRawTransaction("TX decode failed".into()), -32000),
            (CoreError::Conversion("bad".into()), -32603),
            (
                CoreError::ScriptParse {
                    kind: "call",
                    reason: "short".into(),
                },
                -32603,
            ),
            (
                CoreError::Rpc(RpcError::ServerError {
                    code: -28,
                    message: "Loading block index...".into(),
                }),
                -32000,
            ),
        ];
        for (err, code) in cases {
            assert_eq!(AppError::from(err).code(), code);
        }
    }

    #[test]
    fn error_response_keeps_request_id() {
        let resp = AppError::from(CoreError::MethodNotSupported("eth_call".into()))
            .into_rpc_response(serde_json::json!("abc"));
        assert_eq!(resp.id, serde_json::json!("abc"));
        let error = resp.error.expect("error object");
        assert_eq!(error.message, "the method eth_call does not exist/is not available");
    }
}
