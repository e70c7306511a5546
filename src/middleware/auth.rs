use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::{
    error::{AppError, AppResult},
    state::AppState,
};

pub const API_KEY_HEADER: &str = "x-api-key";

/// Succeeds only for a non-empty key equal to `secret`.
pub fn authenticate(presented: &str, secret: &str) -> AppResult<()> {
    if presented.is_empty() || presented != secret {
        return Err(AppError::Authentication(
            "Unauthorized: invalid or missing API key.".into(),
        ));
    }
    Ok(())
}

pub async fn require_api_key(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> AppResult<Response> {
    let presented = headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    authenticate(presented, &state.api_key)?;
    Ok(next.run(request).await)
}
