use std::path::Path;

use reqwest::Url;

use crate::error::CoreError;

/// Basic-auth credentials for the Qtum node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RpcAuth {
    pub(super) user: String,
    pub(super) pass: String,
}

/// Resolve credentials: explicit user + pass first, then the node's cookie
/// file (`username:password`), else no auth.
pub(super) fn resolve_auth(
    user: Option<&str>,
    pass: Option<&str>,
    cookie_file: Option<&Path>,
) -> Result<Option<RpcAuth>, CoreError> {
    match (user, pass) {
        (Some(user), Some(pass)) => {
            return Ok(Some(RpcAuth {
                user: user.to_owned(),
                pass: pass.to_owned(),
            }))
        }
        (Some(_), None) | (None, Some(_)) => {
            return Err(CoreError::Config(
                "both rpc user and rpc pass must be set together".to_owned(),
            ));
        }
        (None, None) => {}
    }

    let Some(cookie_file) = cookie_file else {
        return Ok(None);
    };
    read_cookie_file(cookie_file).map(Some)
}

fn read_cookie_file(path: &Path) -> Result<RpcAuth, CoreError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        CoreError::Config(format!(
            "failed to read rpc cookie file {}: {e}",
            path.display()
        ))
    })?;
    let line = content
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .ok_or_else(|| {
            CoreError::Config(format!("rpc cookie file {} is empty", path.display()))
        })?;

    match line.split_once(':') {
        Some((user, pass)) if !user.is_empty() && !pass.is_empty() => Ok(RpcAuth {
            user: user.to_owned(),
            pass: pass.to_owned(),
        }),
        _ => Err(CoreError::Config(format!(
            "rpc cookie file {} must contain non-empty `username:password`",
            path.display()
        ))),
    }
}

pub(super) fn parse_connection(connection: &str) -> Result<Url, CoreError> {
    let parsed = Url::parse(connection).map_err(|e| {
        CoreError::Config(format!(
            "invalid rpc url `{connection}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(CoreError::Config(format!(
            "unsupported rpc url scheme `{other}`; expected http or https"
        ))),
    }
}
