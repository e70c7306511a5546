use anyhow::anyhow;
use axum::{
    body::{Body, to_bytes},
    extract::Request,
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use serde_json::{Map, Value};

use crate::error::AppResult;

pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Request body decoded once, before routing, for the stages that need it.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

/// Parses JSON bodies into a [`JsonBody`] extension.
///
/// Empty bodies and non-JSON content types become `{}`; malformed JSON is an
/// unclassified failure.
pub async fn parse_json_body(request: Request, next: Next) -> AppResult<Response> {
    let (mut parts, body) = request.into_parts();
    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|err| anyhow!("failed to read request body: {err}"))?;

    let value = if bytes.is_empty() || !is_json(&parts.headers) {
        Value::Object(Map::new())
    } else {
        serde_json::from_slice(&bytes)
            .map_err(|err| anyhow!("malformed JSON body: {err}"))?
    };

    parts.extensions.insert(JsonBody(value));
    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| {
            content_type
                .trim()
                .to_ascii_lowercase()
                .starts_with("application/json")
        })
}
