use std::num::NonZeroU32;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::{header, Url};
use tracing::{debug, trace};

use crate::error::{CoreError, RpcError};

use super::super::types::{ChainInfo, DecodedRawTransaction, TransactionReceipt};
use super::super::{
    QtumRpc, METHOD_DECODE_RAW_TRANSACTION, METHOD_GET_BLOCKCHAIN_INFO, METHOD_GET_TRANSACTION,
    METHOD_GET_TRANSACTION_RECEIPT,
};
use super::connection::{parse_connection, resolve_auth, RpcAuth};
use super::parsing::{parse_receipt_result, parse_result};
use super::protocol::{parse_jsonrpc_error, JsonRpcRequest, JsonRpcResponse};

/// Qtum Core: `RPC_INVALID_ADDRESS_OR_KEY`, returned for unknown txids.
const RPC_INVALID_ADDRESS_OR_KEY: i64 = -5;
/// Qtum Core: `RPC_DESERIALIZATION_ERROR`, returned for undecodable raw hex.
const RPC_DESERIALIZATION_ERROR: i64 = -22;

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Qtum Core JSON-RPC client over HTTP(S).
///
/// Every call is a single request/response exchange. The client holds no
/// per-lookup state and is shared across concurrent requests.
pub struct HttpRpcClient {
    client: reqwest::Client,
    url: Url,
    auth: Option<RpcAuth>,
    limiter: Option<DirectRateLimiter>,
    next_id: AtomicU64,
}

impl HttpRpcClient {
    /// Create a new client for an HTTP(S) URL.
    ///
    /// Authentication precedence:
    /// 1. explicit `user` + `pass`
    /// 2. cookie file (`username:password`) from `cookie_file`
    /// 3. no auth
    ///
    /// If `requests_per_second` is set, outbound requests are delayed to stay
    /// under that rate.
    pub fn new(
        connection: &str,
        user: Option<&str>,
        pass: Option<&str>,
        cookie_file: Option<&Path>,
        requests_per_second: Option<u32>,
    ) -> Result<Self, CoreError> {
        let auth = resolve_auth(user, pass, cookie_file)?;
        let url = parse_connection(connection)?;

        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(32)
            .tcp_nodelay(true)
            .build()
            .map_err(RpcError::Transport)?;

        let limiter = match requests_per_second {
            None => None,
            Some(limit) => {
                let limit = NonZeroU32::new(limit).ok_or_else(|| {
                    CoreError::Config("requests_per_second must be at least 1".to_owned())
                })?;
                Some(RateLimiter::direct(Quota::per_second(limit)))
            }
        };

        Ok(Self {
            client,
            url,
            auth,
            limiter,
            next_id: AtomicU64::new(initial_request_id()),
        })
    }

    async fn wait_for_rate_limit(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }

    async fn rpc_call(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<serde_json::Value, CoreError> {
        self.wait_for_rate_limit().await;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!(
            rpc.id = id,
            rpc.method = method,
            rpc.params = params.len(),
            "rpc call"
        );
        let req = JsonRpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };

        let mut builder = self
            .client
            .post(self.url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .json(&req);
        if let Some(auth) = &self.auth {
            builder = builder.basic_auth(&auth.user, Some(&auth.pass));
        }

        let response = builder.send().await.map_err(RpcError::Transport)?;
        let status = response.status();

        let body = response.text().await.map_err(RpcError::Transport)?;
        debug!(rpc.id = id, rpc.method = method, %status, body_len = body.len(), "rpc response");
        trace!(rpc.id = id, rpc.method = method, body = %body, "rpc response body");

        // Qtum Core answers RPC-level errors with a non-2xx status but still
        // carries a JSON-RPC body, so the status alone is not decisive.
        let decoded: JsonRpcResponse = serde_json::from_str(&body).map_err(|e| {
            RpcError::InvalidResponse(format!("decode JSON-RPC response ({status}): {e}; body={body}"))
        })?;

        if let Some(err) = decoded.error {
            return Err(parse_jsonrpc_error(err));
        }

        Ok(decoded.result.unwrap_or(serde_json::Value::Null))
    }
}

#[async_trait]
impl QtumRpc for HttpRpcClient {
    async fn call(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<serde_json::Value, CoreError> {
        let txid = match method {
            METHOD_GET_TRANSACTION => params
                .first()
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned),
            _ => None,
        };
        let result = self.rpc_call(method, params).await;
        match txid {
            Some(txid) => result.map_err(|err| normalize_gettransaction_error(&txid, err)),
            None => result,
        }
    }

    async fn decode_raw_transaction(&self, hex: &str) -> Result<DecodedRawTransaction, CoreError> {
        let raw = self
            .rpc_call(METHOD_DECODE_RAW_TRANSACTION, vec![serde_json::json!(hex)])
            .await
            .map_err(normalize_decoderawtransaction_error)?;
        parse_result(METHOD_DECODE_RAW_TRANSACTION, raw)
    }

    async fn get_transaction_receipt(
        &self,
        txid: &str,
    ) -> Result<Option<TransactionReceipt>, CoreError> {
        let raw = self
            .rpc_call(METHOD_GET_TRANSACTION_RECEIPT, vec![serde_json::json!(txid)])
            .await?;
        parse_receipt_result(raw)
    }

    async fn get_blockchain_info(&self) -> Result<ChainInfo, CoreError> {
        let raw = self.rpc_call(METHOD_GET_BLOCKCHAIN_INFO, Vec::new()).await?;
        parse_result(METHOD_GET_BLOCKCHAIN_INFO, raw)
    }
}

fn initial_request_id() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

// ==============================================================================
// RPC Error Normalization
// ==============================================================================

/// Convert Qtum Core "unknown txid" responses into `TxNotFound`, keeping
/// other RPC/transport failures as they are.
fn normalize_gettransaction_error(txid: &str, err: CoreError) -> CoreError {
    match err {
        CoreError::Rpc(RpcError::ServerError { code, .. }) if code == RPC_INVALID_ADDRESS_OR_KEY => {
            CoreError::TxNotFound(txid.to_owned())
        }
        other => other,
    }
}

/// Convert "TX decode failed" into `InvalidRawTransaction` so a malformed
/// raw hex is distinguishable from a transport fault.
fn normalize_decoderawtransaction_error(err: CoreError) -> CoreError {
    match err {
        CoreError::Rpc(RpcError::ServerError { code, message })
            if code == RPC_DESERIALIZATION_ERROR =>
        {
            CoreError::InvalidRawTransaction(message)
        }
        other => other,
    }
}
