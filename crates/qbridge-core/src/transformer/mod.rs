//! Translation of Ethereum JSON-RPC calls into Qtum RPC calls and back.
//!
//! Each supported method is a matched pair: a request rewriter that reshapes
//! the inbound request in place and names the [`Continuation`] that must
//! process the node's answer, and a response reconstructor implementing that
//! continuation.

pub mod get_transaction;

use std::sync::Arc;

use tracing::debug;

use crate::error::CoreError;
use crate::jsonrpc::JsonRpcRequest;
use crate::rpc::QtumRpc;
use crate::types::RpcOutput;

pub const METHOD_ETH_GET_TRANSACTION_BY_HASH: &str = "eth_getTransactionByHash";

/// Response handler registered by a request rewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// Rebuild an Ethereum transaction from a `gettransaction` result.
    TransactionByHash,
}

/// Dispatches inbound requests to their rewriter/reconstructor pair.
///
/// Holds only the shared node handle; every lookup is independent.
#[derive(Clone)]
pub struct Transformer {
    rpc: Arc<dyn QtumRpc>,
}

impl Transformer {
    pub fn new(rpc: Arc<dyn QtumRpc>) -> Self {
        Self { rpc }
    }

    /// Rewrite `req` into the node's call shape. No I/O happens here.
    pub fn rewrite_request(&self, req: &mut JsonRpcRequest) -> Result<Continuation, CoreError> {
        match req.method.as_str() {
            METHOD_ETH_GET_TRANSACTION_BY_HASH => get_transaction::rewrite_request(req),
            other => Err(CoreError::MethodNotSupported(other.to_owned())),
        }
    }

    /// Run `continuation` over the node's raw result.
    pub async fn complete(
        &self,
        continuation: Continuation,
        result: serde_json::Value,
    ) -> Result<RpcOutput, CoreError> {
        match continuation {
            Continuation::TransactionByHash => {
                let tx = get_transaction::reconstruct(self.rpc.as_ref(), result).await?;
                Ok(RpcOutput::Transaction(Box::new(tx)))
            }
        }
    }

    /// Rewrite, forward, and reconstruct one request.
    pub async fn handle(&self, mut req: JsonRpcRequest) -> Result<RpcOutput, CoreError> {
        let inbound = req.method.clone();
        let continuation = self.rewrite_request(&mut req)?;
        debug!(
            rpc.inbound = %inbound,
            rpc.method = %req.method,
            ?continuation,
            "forwarding rewritten request"
        );
        let params = req.positional_params().map(<[_]>::to_vec).unwrap_or_default();
        let result = self.rpc.call(&req.method, params).await?;
        self.complete(continuation, result).await
    }
}
