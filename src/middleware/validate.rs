use anyhow::anyhow;
use axum::{extract::Request, middleware::Next, response::Response};
use serde_json::Value;

use crate::{
    dto::products::ProductPayload,
    error::{AppError, AppResult},
    middleware::body::JsonBody,
    validation::validate,
};

/// Rejects product bodies with defects; otherwise hands the typed
/// [`ProductPayload`] to the handler through request extensions.
pub async fn validate_product(mut request: Request, next: Next) -> AppResult<Response> {
    let candidate = request
        .extensions()
        .get::<JsonBody>()
        .map(|JsonBody(value)| value.clone())
        .unwrap_or(Value::Null);

    let defects = validate(&candidate);
    if !defects.is_empty() {
        return Err(AppError::validation("Validation failed", defects));
    }

    let payload: ProductPayload = serde_json::from_value(candidate)
        .map_err(|err| anyhow!("validated body did not decode: {err}"))?;
    request.extensions_mut().insert(payload);
    Ok(next.run(request).await)
}
