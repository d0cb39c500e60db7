use std::path::PathBuf;

use clap::Parser;

/// qbridge: Ethereum-style JSON-RPC gateway in front of a Qtum node.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Qtum node RPC URL.
    #[arg(long, default_value = "http://127.0.0.1:3889", env = "QBRIDGE_RPC_URL")]
    pub rpc_url: String,

    /// RPC username (must be given together with --rpc-pass).
    #[arg(long, env = "QBRIDGE_RPC_USER")]
    pub rpc_user: Option<String>,

    /// RPC password (must be given together with --rpc-user).
    #[arg(long, env = "QBRIDGE_RPC_PASS")]
    pub rpc_pass: Option<String>,

    /// Node `.cookie` file, used when no explicit credentials are given.
    #[arg(long, env = "QBRIDGE_RPC_COOKIE_FILE")]
    pub rpc_cookie_file: Option<PathBuf>,

    /// Upper bound on outbound node requests per second.
    #[arg(long, env = "QBRIDGE_RPC_RPS")]
    pub rpc_requests_per_second: Option<u32>,

    /// Address to bind the gateway to.
    #[arg(long, default_value = "127.0.0.1", env = "QBRIDGE_BIND")]
    pub bind: String,

    /// Port to listen on.
    #[arg(long, default_value = "23889", env = "QBRIDGE_PORT")]
    pub port: u16,

    /// Browser origin allowed to call the gateway. No CORS headers are sent
    /// when unset.
    #[arg(long, env = "QBRIDGE_CORS_ORIGIN")]
    pub cors_origin: Option<String>,
}
