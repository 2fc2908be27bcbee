//! Lambda host - adapts API Gateway / function URL proxy events to the adapter.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::error;

use super::handler::{AppState, handle_request};
use super::helpers::err_response;
use super::parsing::v_str;
use crate::errors::BotError;

/// Extracts the raw request body, decoding it when the proxy marked it as base64.
///
/// A missing body yields an empty buffer, which the adapter rejects as invalid JSON.
///
/// # Errors
///
/// Returns `BotError::ParseError` if a base64 body cannot be decoded.
pub fn extract_body(payload: &Value) -> Result<Vec<u8>, BotError> {
    let body = v_str(payload, &["body"]).unwrap_or_default();
    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if is_base64 {
        STANDARD
            .decode(body)
            .map_err(|e| BotError::ParseError(format!("Failed to decode base64 body: {e}")))
    } else {
        Ok(body.as_bytes().to_vec())
    }
}

/// Lambda handler for the proxy integration.
///
/// # Errors
///
/// Never fails at the runtime level; failures are returned as proxy responses.
pub async fn function_handler(state: &AppState, event: LambdaEvent<Value>) -> Result<Value, Error> {
    let body = match extract_body(&event.payload) {
        Ok(b) => b,
        Err(e) => {
            error!("Request body error: {}", e);
            return Ok(err_response(500, &e.to_string()).into_proxy_response());
        }
    };

    Ok(handle_request(state, &body).await.into_proxy_response())
}
