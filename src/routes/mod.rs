use std::time::Duration;

use axum::{
    Json, Router,
    http::{HeaderName, Request, Response, StatusCode, Uri},
    middleware,
    routing::get,
};
use chrono::Utc;
use tower::{Layer, limit::ConcurrencyLimitLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::{
    middleware::body::parse_json_body,
    response::ErrorBody,
    state::AppState,
};

pub mod doc;
pub mod health;
pub mod params;
pub mod products;

const REQUEST_ID_HEADER: &str = "x-request-id";

pub fn create_api_router(state: &AppState) -> Router<AppState> {
    Router::new().nest("/products", products::router(state))
}

/// Router wrapped so that `/api/products/` and `/api/products` resolve alike.
pub type App = NormalizePath<Router>;

/// Full application: logging, then body parsing, then routing.
/// Body size is capped by `parse_json_body`.
pub fn create_app(state: AppState) -> App {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<_>| {
            let request_id = request
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id
            )
        })
        .on_request(|request: &Request<_>, _span: &tracing::Span| {
            tracing::info!(
                timestamp = %Utc::now().to_rfc3339(),
                method = %request.method(),
                path = %request.uri().path(),
                "request started"
            );
        })
        .on_response(|response: &Response<_>, latency: Duration, _span: &tracing::Span| {
            tracing::info!(
                status = %response.status(),
                ms = %latency.as_millis(),
                "request finished"
            );
        });

    let router = Router::new()
        .route("/", get(health::welcome))
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router(&state))
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .layer(middleware::from_fn(parse_json_body))
        .layer(trace_layer)
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(ConcurrencyLimitLayer::new(100))
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorBody>) {
    let body = ErrorBody::new(format!("Route {} not found.", uri.path()));
    (StatusCode::NOT_FOUND, Json(body))
}
