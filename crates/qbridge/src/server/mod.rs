mod error;

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::header::InvalidHeaderValue;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};

use qbridge_core::jsonrpc::{JsonRpcRequest, JsonRpcResponse};
use qbridge_core::Transformer;

use self::error::AppError;

/// JSON-RPC requests are a method name and a hash; anything near this size
/// is not a lookup.
const RPC_BODY_LIMIT: usize = 64 * 1024;

// ==============================================================================
// Application State
// ==============================================================================

pub struct AppState {
    pub transformer: Transformer,
}

type SharedState = Arc<AppState>;

// ==============================================================================
// Router
// ==============================================================================

pub fn build_router(state: AppState, cors_origin: Option<&str>) -> Result<Router, InvalidHeaderValue> {
    let shared = Arc::new(state);

    let router = Router::new()
        .route("/", post(json_rpc))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(RPC_BODY_LIMIT))
        .with_state(shared);

    let Some(origin) = cors_origin else {
        return Ok(router);
    };

    // Only reflect the allowed origin when the request's Origin header
    // actually matches. Otherwise, omit the header entirely so browsers
    // get a clean CORS rejection instead of a mismatched origin value.
    let allowed: HeaderValue = origin.parse()?;
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |request_origin: &HeaderValue, _| *request_origin == allowed,
        ))
        .allow_methods([axum::http::Method::POST, axum::http::Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Ok(router.layer(cors))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

// ==============================================================================
// JSON-RPC Endpoint
// ==============================================================================

async fn json_rpc(State(state): State<SharedState>, body: Bytes) -> Json<JsonRpcResponse> {
    let value: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(err) => {
            let err = AppError::Parse(format!("parse error: {err}"));
            return Json(err.into_rpc_response(serde_json::Value::Null));
        }
    };

    let id = value.get("id").cloned().unwrap_or(serde_json::Value::Null);
    match dispatch(&state.transformer, value).await {
        Ok(result) => Json(JsonRpcResponse::success(id, result)),
        Err(err) => {
            match &err {
                AppError::Upstream(msg) | AppError::Internal(msg) => {
                    tracing::warn!(code = err.code(), error = %msg, "request failed");
                }
                _ => tracing::debug!(code = err.code(), ?err, "request rejected"),
            }
            Json(err.into_rpc_response(id))
        }
    }
}

async fn dispatch(
    transformer: &Transformer,
    value: serde_json::Value,
) -> Result<serde_json::Value, AppError> {
    if value.is_array() {
        return Err(AppError::InvalidRequest(
            "batch requests are not supported".to_owned(),
        ));
    }
    let req: JsonRpcRequest = serde_json::from_value(value)
        .map_err(|e| AppError::InvalidRequest(format!("invalid request: {e}")))?;

    tracing::debug!(rpc.method = %req.method, rpc.id = %req.id, "inbound request");
    let output = transformer.handle(req).await?;

    serde_json::to_value(output)
        .map_err(|e| AppError::Internal(format!("serialize result: {e}")))
}
