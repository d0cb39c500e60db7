/// Transport and protocol failures talking to the Qtum node.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("RPC server error {code}: {message}")]
    ServerError { code: i64, message: String },

    #[error("invalid RPC response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid params: {0}")]
    InvalidParams(String),

    #[error("method not supported: {0}")]
    MethodNotSupported(String),

    #[error("invalid transaction data: {0}")]
    InvalidTxData(String),

    #[error("conversion error: {0}")]
    Conversion(String),

    #[error("malformed {kind} script: {reason}")]
    ScriptParse { kind: &'static str, reason: String },

    #[error("raw transaction decode failed: {0}")]
    InvalidRawTransaction(String),

    #[error("transaction not found: {0}")]
    TxNotFound(String),

    #[error(transparent)]
    Rpc(#[from] RpcError),
}
