pub mod amount;
pub mod error;
pub mod hexutil;
pub mod jsonrpc;
pub mod rpc;
pub mod script;
pub mod transformer;
pub mod types;

#[cfg(test)]
mod test_util;

pub use error::CoreError;
pub use transformer::Transformer;
pub use types::{EthTransaction, RpcOutput};
