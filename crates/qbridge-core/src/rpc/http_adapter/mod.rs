//! Native JSON-RPC client for Qtum Core compatible endpoints.
//!
//! Implements [`QtumRpc`](super::QtumRpc) over JSON-RPC using `reqwest`, with
//! HTTP(S) transport, optional request rate limiting, and basic or cookie
//! auth.

mod client;
mod connection;
mod parsing;
mod protocol;

pub use client::HttpRpcClient;
